//! Background image carousel shown behind the player card

/// Wrap-around cursor over configured background image URLs
#[derive(Debug, Clone, Default)]
pub struct Backdrop {
    images: Vec<String>,
    index: usize,
}

impl Backdrop {
    pub fn new(images: Vec<String>) -> Self {
        Self { images, index: 0 }
    }

    /// Image currently shown, `None` when no backgrounds are configured
    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Advance, wrapping from the last image to the first
    pub fn forward(&mut self) -> Option<&str> {
        if !self.images.is_empty() {
            self.index = (self.index + 1) % self.images.len();
        }
        self.current()
    }

    /// Go back, wrapping from the first image to the last
    pub fn back(&mut self) -> Option<&str> {
        if !self.images.is_empty() {
            self.index = self.index.checked_sub(1).unwrap_or(self.images.len() - 1);
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backdrop(n: usize) -> Backdrop {
        Backdrop::new((0..n).map(|i| format!("https://img.example.com/{i}.jpg")).collect())
    }

    #[test]
    fn forward_wraps_to_first() {
        let mut b = backdrop(3);
        b.forward();
        b.forward();
        assert_eq!(b.index(), 2);
        assert_eq!(b.forward(), Some("https://img.example.com/0.jpg"));
    }

    #[test]
    fn back_wraps_to_last() {
        let mut b = backdrop(3);
        assert_eq!(b.back(), Some("https://img.example.com/2.jpg"));
        assert_eq!(b.back(), Some("https://img.example.com/1.jpg"));
    }

    #[test]
    fn empty_backdrop_stays_empty() {
        let mut b = Backdrop::default();
        assert!(b.forward().is_none());
        assert!(b.back().is_none());
        assert_eq!(b.index(), 0);
    }
}
