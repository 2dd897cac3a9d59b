use linked_hash_map::LinkedHashMap;

use crate::SourceError;

/// Channel layout of float image data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    Rgb,
    Rgba,
}

impl PixelFormat {
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }
}

fn check_len(
    width: u32,
    height: u32,
    format: PixelFormat,
    actual: usize,
) -> Result<(), SourceError> {
    let expected = width as usize * height as usize * format.channels();
    if expected != actual {
        return Err(SourceError::ImageShape {
            width,
            height,
            channels: format.channels(),
            expected,
            actual,
        });
    }
    Ok(())
}

/// Reverse row order of one top-row-first image.
fn bottom_up(data: &[f32], width: u32, format: PixelFormat) -> Vec<f32> {
    let row = width as usize * format.channels();
    if row == 0 {
        return data.to_vec();
    }
    data.chunks_exact(row).rev().flatten().copied().collect()
}

/// A single float image, rows top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFrame {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<f32>,
}

impl ImageFrame {
    pub fn new(
        width: u32,
        height: u32,
        format: PixelFormat,
        data: Vec<f32>,
    ) -> Result<Self, SourceError> {
        check_len(width, height, format, data.len())?;
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn format(&self) -> PixelFormat {
        self.format
    }
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Pixels bottom row first, the order `glTexImage2D` reads.
    pub fn bottom_up_data(&self) -> Vec<f32> {
        bottom_up(&self.data, self.width, self.format)
    }
}

/// One or more same-sized frames that become one texture array.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageStack {
    width: u32,
    height: u32,
    format: PixelFormat,
    frames: Vec<Vec<f32>>,
}

impl ImageStack {
    pub fn new(
        width: u32,
        height: u32,
        format: PixelFormat,
        frames: Vec<Vec<f32>>,
    ) -> Result<Self, SourceError> {
        if frames.is_empty() {
            return Err(SourceError::EmptyStack);
        }
        for frame in &frames {
            check_len(width, height, format, frame.len())?;
        }
        Ok(Self {
            width,
            height,
            format,
            frames,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn format(&self) -> PixelFormat {
        self.format
    }
    pub fn total_frames(&self) -> usize {
        self.frames.len()
    }

    /// All frames back to back, each bottom row first: the layout `glTexImage3D` reads.
    pub fn layered_bottom_up_data(&self) -> Vec<f32> {
        self.frames
            .iter()
            .flat_map(|f| bottom_up(f, self.width, self.format))
            .collect()
    }
}

/// A value the host hands to a node input.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Scalar(f64),
    Vector(Vec<f64>),
    Image(ImageFrame),
    ImageArray(ImageStack),
}

impl InputValue {
    /// Wraps a batch of frames: one frame is a plain image, more become an array.
    /// An empty batch is no input at all.
    pub fn from_frames(
        width: u32,
        height: u32,
        format: PixelFormat,
        mut frames: Vec<Vec<f32>>,
    ) -> Result<Option<Self>, SourceError> {
        match frames.len() {
            0 => Ok(None),
            1 => {
                let data = frames.pop().unwrap_or_default();
                Ok(Some(InputValue::Image(ImageFrame::new(
                    width, height, format, data,
                )?)))
            }
            _ => Ok(Some(InputValue::ImageArray(ImageStack::new(
                width, height, format, frames,
            )?))),
        }
    }
}

impl From<f64> for InputValue {
    fn from(v: f64) -> Self {
        InputValue::Scalar(v)
    }
}

impl From<Vec<f64>> for InputValue {
    fn from(v: Vec<f64>) -> Self {
        InputValue::Vector(v)
    }
}

/// Named node inputs in host order. `None` is a connected-but-empty input.
pub type Inputs = LinkedHashMap<String, Option<InputValue>>;
