//! Print segments: several independent shuffles of the same roster

use rand::Rng;

use super::roster::RosterList;
use super::shuffle::shuffle;
use crate::error::ValidationError;
use crate::fixed_width;
use crate::settings::PrintLayout;

/// Four freshly shuffled, 12-character-wide copies of the roster's names.
///
/// Checked flags are ignored. Each segment is its own shuffle, so two
/// segments can come out identical by chance.
pub fn generate_print_segments<R: Rng + ?Sized>(
    list: &RosterList,
    rng: &mut R,
) -> Result<Vec<Vec<String>>, ValidationError> {
    generate_segments_with(list, &PrintLayout::default(), rng)
}

pub fn generate_segments_with<R: Rng + ?Sized>(
    list: &RosterList,
    layout: &PrintLayout,
    rng: &mut R,
) -> Result<Vec<Vec<String>>, ValidationError> {
    if list.is_empty() {
        return Err(ValidationError::EmptyList);
    }

    let names = list.names();
    let segments: Vec<Vec<String>> = (0..layout.segments)
        .map(|_| {
            shuffle(&names, rng)
                .iter()
                .map(|name| fixed_width(name, layout.name_width))
                .collect()
        })
        .collect();
    log::debug!("Generated {} print segments", segments.len());
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{NAME_WIDTH, PRINT_SEGMENTS};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_segments_are_padded_permutations() {
        let mut list = RosterList::from_names(["Ana", "Bartholomew Jones", "Cy"]);
        list.set_checked(1, true);
        let mut rng = Pcg32::seed_from_u64(8);
        let segments = generate_print_segments(&list, &mut rng).unwrap();

        assert_eq!(segments.len(), PRINT_SEGMENTS);
        for segment in &segments {
            assert_eq!(segment.len(), 3);
            assert!(segment.iter().all(|n| n.chars().count() == NAME_WIDTH));
            let mut sorted = segment.clone();
            sorted.sort();
            assert_eq!(
                sorted,
                vec!["Ana         ", "Bartholomew ", "Cy          "]
            );
        }
    }

    #[test]
    fn test_segments_are_independent_shuffles() {
        let list = RosterList::from_names((0..15).map(|i| format!("Student {i}")));
        let mut rng = Pcg32::seed_from_u64(17);
        let segments = generate_print_segments(&list, &mut rng).unwrap();
        // 15! orders; four identical draws would point at a shared shuffle
        assert!(segments.iter().any(|s| s != &segments[0]));
    }

    #[test]
    fn test_empty_list_cannot_print() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(
            generate_print_segments(&RosterList::new(), &mut rng),
            Err(ValidationError::EmptyList)
        );
    }

    #[test]
    fn test_custom_layout() {
        let list = RosterList::from_names(["Annabelle", "Bo"]);
        let layout = PrintLayout {
            segments: 2,
            name_width: 4,
        };
        let mut rng = Pcg32::seed_from_u64(4);
        let segments = generate_segments_with(&list, &layout, &mut rng).unwrap();
        assert_eq!(segments.len(), 2);
        for segment in segments {
            let mut sorted = segment;
            sorted.sort();
            assert_eq!(sorted, vec!["Anna", "Bo  "]);
        }
    }
}
