use thiserror::Error;

/// Which part of a cropped thumbnail stays visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CropPosition {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
}

impl CropPosition {
    pub fn css_value(self) -> &'static str {
        match self {
            CropPosition::Center => "center",
            CropPosition::Top => "center top",
            CropPosition::Bottom => "center bottom",
            CropPosition::Left => "left center",
            CropPosition::Right => "right center",
        }
    }
}

/// One showcased portfolio item.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryEntry {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub badge: Option<&'static str>,
    pub thumbnail_image: &'static str,
    /// Uncropped screenshot shown in the preview. Falls back to the thumbnail.
    pub full_image: Option<&'static str>,
    pub crop_position: Option<CropPosition>,
    pub external_link: Option<&'static str>,
}

impl GalleryEntry {
    pub fn full_image_src(&self) -> &'static str {
        match self.full_image {
            Some(src) if !src.trim().is_empty() => src,
            _ => self.thumbnail_image,
        }
    }

    pub fn object_position(&self) -> &'static str {
        self.crop_position.unwrap_or_default().css_value()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    #[error("gallery entry #{index} has an empty title")]
    EmptyTitle { index: usize },
    #[error("gallery entry \"{title}\" has no image")]
    MissingImage { title: &'static str },
}

static WORK_ITEMS: [GalleryEntry; 3] = [
    GalleryEntry {
        title: "Mechanic Direct",
        subtitle: "Premium UI + clear conversion",
        badge: Some("Live product"),
        thumbnail_image: "/work/mechanic-direct.png",
        full_image: None,
        crop_position: Some(CropPosition::Left),
        external_link: None,
    },
    GalleryEntry {
        title: "FIFO Resume Mate",
        subtitle: "Pricing that sells the value",
        badge: Some("Pricing section"),
        thumbnail_image: "/work/fifo-resume-mate.png",
        full_image: None,
        // Tall page, keep the plan names and prices in frame.
        crop_position: Some(CropPosition::Top),
        external_link: None,
    },
    GalleryEntry {
        title: "Outback Lens",
        subtitle: "Strong hero visual + brand feel",
        badge: Some("Hero section"),
        thumbnail_image: "/work/outback-lens.png",
        full_image: None,
        crop_position: Some(CropPosition::Center),
        external_link: None,
    },
];

pub fn work_items() -> &'static [GalleryEntry] {
    &WORK_ITEMS
}

pub fn validate(entries: &[GalleryEntry]) -> Result<(), GalleryError> {
    for (index, entry) in entries.iter().enumerate() {
        if entry.title.trim().is_empty() {
            return Err(GalleryError::EmptyTitle { index });
        }
        let has_thumbnail = !entry.thumbnail_image.trim().is_empty();
        let has_full = entry.full_image.map_or(false, |src| !src.trim().is_empty());
        if !has_thumbnail && !has_full {
            return Err(GalleryError::MissingImage { title: entry.title });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &'static str, thumb: &'static str, full: Option<&'static str>) -> GalleryEntry {
        GalleryEntry {
            title,
            subtitle: "",
            badge: None,
            thumbnail_image: thumb,
            full_image: full,
            crop_position: None,
            external_link: None,
        }
    }

    #[test]
    fn built_in_gallery_is_valid() {
        assert_eq!(validate(work_items()), Ok(()));
        assert_eq!(work_items().len(), 3);
    }

    #[test]
    fn full_image_falls_back_to_thumbnail() {
        let cropped_only = entry("A", "/a-thumb.png", None);
        assert_eq!(cropped_only.full_image_src(), "/a-thumb.png");

        let blank_full = entry("A", "/a-thumb.png", Some("  "));
        assert_eq!(blank_full.full_image_src(), "/a-thumb.png");

        let both = entry("B", "/b-thumb.png", Some("/b-full.png"));
        assert_eq!(both.full_image_src(), "/b-full.png");
    }

    #[test]
    fn missing_crop_hint_means_center() {
        assert_eq!(entry("A", "/a.png", None).object_position(), "center");
        assert_eq!(work_items()[1].object_position(), "center top");
        assert_eq!(work_items()[0].object_position(), "left center");
    }

    #[test]
    fn rejects_empty_title() {
        let entries = [entry("A", "/a.png", None), entry(" ", "/b.png", None)];
        assert_eq!(validate(&entries), Err(GalleryError::EmptyTitle { index: 1 }));
    }

    #[test]
    fn accepts_full_image_without_thumbnail() {
        assert_eq!(validate(&[entry("A", "", Some("/a-full.png"))]), Ok(()));
        assert_eq!(
            validate(&[entry("A", "", None)]),
            Err(GalleryError::MissingImage { title: "A" })
        );
    }
}
