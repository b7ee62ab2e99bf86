use inkline_traits::{FontError, FontFace, FontHandle, TextMetrics};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Minimal font that counts how often it was copied.
#[derive(Debug)]
pub struct StubFont {
    pub family: Option<String>,
    pub size: u32,
    pub fail_copies: bool,
    pub copies: AtomicUsize,
}

impl StubFont {
    pub fn new(family: &str, size: u32) -> Self {
        Self {
            family: Some(family.to_string()),
            size,
            fail_copies: false,
            copies: AtomicUsize::new(0),
        }
    }

    pub fn handle(family: &str, size: u32) -> FontHandle {
        Arc::new(Self::new(family, size))
    }

    pub fn anonymous(size: u32) -> FontHandle {
        Arc::new(Self {
            family: None,
            ..Self::new("", size)
        })
    }

    pub fn failing(family: &str, size: u32) -> FontHandle {
        Arc::new(Self {
            fail_copies: true,
            ..Self::new(family, size)
        })
    }
}

impl FontFace for StubFont {
    fn family_name(&self) -> Option<String> {
        self.family.clone()
    }

    fn point_size(&self) -> u32 {
        self.size
    }

    fn copy_at_size(&self, point_size: u32) -> Result<FontHandle, FontError> {
        if self.fail_copies {
            return Err(FontError::CopyFailed(point_size));
        }
        self.copies.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(StubFont {
            family: self.family.clone(),
            size: point_size,
            fail_copies: false,
            copies: AtomicUsize::new(0),
        }))
    }

    fn line_height(&self) -> i32 {
        self.size as i32
    }

    fn measure(&self, text: &str) -> Result<TextMetrics, FontError> {
        Ok(TextMetrics::new(text.chars().count() as i32, self.size as i32))
    }
}
