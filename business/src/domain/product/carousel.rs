/// Shown when a product has no photos.
pub const PLACEHOLDER_PHOTO_URL: &str =
    "https://via.placeholder.com/300x300/CCCCCC/FFFFFF?text=Sin+Foto";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarouselMove {
    #[default]
    Stay,
    Next,
    Prev,
}

/// Position inside a product's photo list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Starts at `index`, wrapped into range. Empty sets always sit at 0.
    pub fn at(len: usize, index: usize) -> Self {
        let index = if len == 0 { 0 } else { index % len };
        Self { index, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Controls are only offered when there is something to move to.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn next(self) -> Self {
        if !self.has_controls() {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if !self.has_controls() {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    pub fn apply(self, movement: CarouselMove) -> Self {
        match movement {
            CarouselMove::Stay => self,
            CarouselMove::Next => self.next(),
            CarouselMove::Prev => self.prev(),
        }
    }

    pub fn current<'a>(&self, photos: &'a [String]) -> &'a str {
        photos
            .get(self.index)
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_PHOTO_URL)
    }

    /// `"2 / 3"`, only when controls are shown.
    pub fn indicator(&self) -> Option<String> {
        self.has_controls()
            .then(|| format!("{} / {}", self.index + 1, self.len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photos(n: usize) -> Vec<String> {
        (0..n)
            .map(|i| format!("https://img.example.com/{}.jpg", i))
            .collect()
    }

    #[test]
    fn should_wrap_forward_from_last_photo() {
        let carousel = Carousel::at(3, 2);
        assert_eq!(carousel.next().index(), 0);
    }

    #[test]
    fn should_wrap_backward_from_first_photo() {
        let carousel = Carousel::new(3);
        assert_eq!(carousel.prev().index(), 2);
    }

    #[test]
    fn should_not_move_with_a_single_photo() {
        let carousel = Carousel::new(1);
        assert_eq!(carousel.next().index(), 0);
        assert_eq!(carousel.prev().index(), 0);
        assert!(!carousel.has_controls());
        assert!(carousel.indicator().is_none());
    }

    #[test]
    fn should_not_move_without_photos() {
        let carousel = Carousel::new(0);
        assert_eq!(carousel.apply(CarouselMove::Next), carousel);
        assert_eq!(carousel.apply(CarouselMove::Prev), carousel);
    }

    #[test]
    fn should_fall_back_to_placeholder_without_photos() {
        let carousel = Carousel::new(0);
        assert_eq!(carousel.current(&[]), PLACEHOLDER_PHOTO_URL);
    }

    #[test]
    fn should_wrap_out_of_range_start_index() {
        let carousel = Carousel::at(3, 7);
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.current(&photos(3)), "https://img.example.com/1.jpg");
    }

    #[test]
    fn should_show_one_based_indicator() {
        let carousel = Carousel::new(4).next();
        assert_eq!(carousel.indicator().as_deref(), Some("2 / 4"));
    }
}
