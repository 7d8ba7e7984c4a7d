use proptest::collection::vec;
use proptest::prelude::*;

use seqview_core_rs::InfixError;
use seqview_strings_rs::{string_id, Infix, InfixSet};

fn nucleotides(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    vec(prop::sample::select(b"ACGT".to_vec()), 0..max_len)
}

/// Sequence together with valid (begin, end) coordinates inside it.
fn sequence_with_infixes() -> impl Strategy<Value = (Vec<u8>, Vec<(u32, u32)>)> {
    nucleotides(64).prop_flat_map(|seq| {
        let len = seq.len() as u32;
        let coords = vec(
            (0..=len, 0..=len).prop_map(|(a, b)| (a.min(b), a.max(b))),
            0..32,
        );
        (Just(seq), coords)
    })
}

/// Sequence set together with valid (begin, end, string id, reserved) coordinates.
fn sequence_set_with_infixes() -> impl Strategy<Value = (Vec<Vec<u8>>, Vec<(u32, u32, u32, u32)>)>
{
    vec(nucleotides(32), 1..8).prop_flat_map(|set| {
        let lengths: Vec<u32> = set.iter().map(|x| x.len() as u32).collect();
        let coords = vec(
            (0..lengths.len() as u32).prop_flat_map(move |id| {
                let len = lengths[id as usize];
                (0..=len, 0..=len, Just(id))
                    .prop_map(|(a, b, id)| (a.min(b), a.max(b), id, 0u32))
            }),
            0..32,
        );
        (Just(set), coords)
    })
}

proptest! {
    #[test]
    fn infix_matches_parent((seq, coords) in sequence_with_infixes()) {
        for (begin, end) in coords {
            let infix = Infix::new(seq.as_slice(), (begin, end));
            prop_assert_eq!(infix.size(), (end - begin) as usize);
            prop_assert_eq!(infix.coords(), (begin, end));
            prop_assert_eq!(infix.range(), (end, begin));
            for i in 0..infix.size() {
                prop_assert_eq!(infix[i], seq[begin as usize + i]);
            }
            prop_assert_eq!(
                infix.try_get(infix.size()),
                Err(InfixError::OutOfRange { index: infix.size(), len: infix.size() })
            );
        }
    }

    #[test]
    fn single_sequence_set((seq, coords) in sequence_with_infixes()) {
        let set = InfixSet::new(seq.as_slice(), &coords);
        prop_assert_eq!(set.len(), coords.len());
        prop_assert!(set.validate().is_ok());
        for (i, &(begin, end)) in coords.iter().enumerate() {
            let infix = set.at(i);
            prop_assert_eq!(infix.coords(), (begin, end));
            prop_assert_eq!(infix.size(), (end - begin) as usize);
            prop_assert_eq!(infix.as_slice(), &seq[begin as usize..end as usize]);
        }
        prop_assert!(set.get(coords.len()).is_none());
    }

    #[test]
    fn multi_sequence_set((strings, coords) in sequence_set_with_infixes()) {
        let set = InfixSet::new(&strings, &coords);
        prop_assert_eq!(set.len(), coords.len());
        prop_assert!(set.validate().is_ok());
        for (i, &(begin, end, id, _)) in coords.iter().enumerate() {
            let infix = set.at(i);
            let owner = &strings[id as usize];
            prop_assert!(std::ptr::eq(*infix.string(), owner));
            prop_assert_eq!(string_id(&infix), id);
            prop_assert_eq!(infix.as_slice(), &owner[begin as usize..end as usize]);
        }
    }

    #[test]
    fn invalid_owner_ids_are_reported(
        strings in vec(nucleotides(8), 0..4),
        extra in 0..16u32,
    ) {
        let id = strings.len() as u32 + extra;
        let coords = [(0u32, 0u32, id, 0u32)];
        let set = InfixSet::new(&strings, &coords);
        prop_assert_eq!(
            set.try_get(0).err(),
            Some(InfixError::InvalidOwnerId { id: id as usize, len: strings.len() })
        );
        prop_assert!(set.validate().is_err());
    }
}
