//! Palette editing.
//!
//! Edits only ever touch [`Look::palette`]; the original palette captured at
//! generation stays as it was so a look can always be reset. These are
//! in-memory changes, persisted favorites are untouched until the caller saves.

use crate::common::{LookError, LookResult};
use crate::model::{HexColor, Look};

impl Look {
    /// Replaces the color at `index`.
    ///
    /// Both preconditions are checked before anything is written, so a
    /// rejected edit leaves the palette exactly as it was.
    pub fn set_color(&mut self, index: usize, value: &str) -> LookResult<()> {
        let len = self.palette.len();
        if index >= len {
            return Err(LookError::InvalidIndex { index, len });
        }
        let color: HexColor = value.parse()?;

        log::debug!(
            "Look {}: swatch {index} {} -> {color}",
            self.id(),
            self.palette[index]
        );
        self.palette[index] = color;
        Ok(())
    }

    /// True if any position differs from the original palette.
    pub fn is_modified(&self) -> bool {
        self.palette.as_slice() != self.original_palette()
    }

    /// Positions whose color differs from the original palette.
    pub fn modified_indices(&self) -> Vec<usize> {
        self.palette
            .iter()
            .zip(self.original_palette())
            .enumerate()
            .filter(|(_, (current, original))| current != original)
            .map(|(index, _)| index)
            .collect()
    }

    /// Restores the original palette. Always succeeds.
    pub fn reset(&mut self) {
        self.palette = self.original_palette().to_vec();
    }
}

#[cfg(test)]
mod tests {
    use crate::common::LookError;
    use crate::model::fixtures::{BOLD_PALETTE, bold_look};
    use crate::model::{HexColor, PALETTE_SIZE};
    use claims::*;
    use proptest::prelude::*;

    #[test]
    fn test_set_color_replaces_one_swatch() {
        let mut look = bold_look();
        assert_ok!(look.set_color(1, "#00ff00"));

        assert_eq!(look.palette()[1], HexColor::from_rgb(0, 0xFF, 0));
        assert_eq!(look.original_palette()[1], BOLD_PALETTE[1]);
        assert!(look.is_modified());
        assert_eq!(look.modified_indices(), vec![1]);
    }

    #[test]
    fn test_invalid_index_leaves_palette_untouched() {
        let mut look = bold_look();
        let err = assert_err!(look.set_color(5, "#FFFFFF"));

        assert_eq!(err, LookError::InvalidIndex { index: 5, len: 5 });
        assert_eq!(look.palette(), &BOLD_PALETTE);
    }

    #[test]
    fn test_invalid_color_leaves_palette_untouched() {
        let mut look = bold_look();
        let err = assert_err!(look.set_color(0, "crimson"));

        assert_eq!(err, LookError::invalid_color("crimson"));
        assert!(!look.is_modified());
    }

    #[test]
    fn test_setting_the_original_color_is_not_a_modification() {
        let mut look = bold_look();
        assert_ok!(look.set_color(0, "b91c1c"));
        assert!(!look.is_modified());
    }

    #[test]
    fn test_reset_on_unmodified_look_is_a_no_op() {
        let mut look = bold_look();
        look.reset();
        assert_eq!(look.palette(), &BOLD_PALETTE);
    }

    fn edit_strategy() -> impl Strategy<Value = Vec<(usize, (u8, u8, u8))>> {
        prop::collection::vec((0..PALETTE_SIZE, any::<(u8, u8, u8)>()), 0..20)
    }

    proptest! {
        #[test]
        fn test_reset_restores_original_after_any_edits(edits in edit_strategy()) {
            let mut look = bold_look();
            for (index, (r, g, b)) in &edits {
                let value = HexColor::from_rgb(*r, *g, *b).to_string();
                prop_assert!(look.set_color(*index, &value).is_ok());
                prop_assert_eq!(look.palette()[*index], HexColor::from_rgb(*r, *g, *b));
            }

            prop_assert_eq!(look.palette().len(), PALETTE_SIZE);
            look.reset();

            prop_assert_eq!(look.palette(), look.original_palette());
            prop_assert!(!look.is_modified());
            prop_assert!(look.modified_indices().is_empty());
        }

        #[test]
        fn test_out_of_range_index_always_rejected(index in PALETTE_SIZE..1000usize) {
            let mut look = bold_look();
            let rejected = matches!(
                look.set_color(index, "#FFFFFF"),
                Err(LookError::InvalidIndex { .. })
            );
            prop_assert!(rejected);
            prop_assert!(!look.is_modified());
        }
    }
}
