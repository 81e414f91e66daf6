//! End-to-end rope behavior: construction, assignment, concatenation,
//! slicing, and a randomized comparison against a flat model.

use braid_rope::{concat, Rope, RopeError};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn size_matches_the_source_text() {
    let rope = Rope::from("RopeTest");
    assert_eq!(rope.len(), "RopeTest".len());
}

#[test]
fn linearized_round_trips_the_source_text() {
    let rope = Rope::from("RopeTest");
    assert_eq!(rope.linearized(), b"RopeTest");
}

#[test]
fn assigning_text_replaces_the_content() {
    let mut rope = Rope::new();
    assert!(rope.is_empty());
    rope = Rope::from("RopeTest");
    assert_eq!(rope.len(), 8);
    assert_eq!(rope, "RopeTest");
}

#[test]
fn assigning_another_rope_shares_its_content() {
    let source = Rope::from("RopeTest2");
    let mut rope = Rope::new();
    assert!(rope.is_empty());
    rope = source.clone();
    assert_eq!(rope.len(), source.len());
    assert_eq!(rope.linearized(), source.linearized());
}

#[test]
fn self_assignment_changes_nothing() {
    let mut rope = Rope::from("RopeTest2");
    rope = rope.clone();
    assert_eq!(rope.len(), 9);
    assert_eq!(rope, "RopeTest2");
}

#[test]
fn concat_of_two_basic_ropes() {
    let mut lhs = Rope::from("Rope Lhs,");
    let rhs = Rope::from("Rope Rhs");

    lhs.concat(&rhs);

    assert_eq!(lhs.len(), 17);
    assert_eq!(lhs, "Rope Lhs,Rope Rhs");
    assert_eq!(rhs, "Rope Rhs");
}

#[test]
fn concat_of_a_basic_rope_with_a_concat_chain() {
    let mut rhs = Rope::from("2nd");
    rhs.concat(&Rope::from("3rd"));

    let mut rope = Rope::from("1st");
    rope.concat(&rhs);

    assert_eq!(rope.len(), 9);
    assert_eq!(rope, "1st2nd3rd");
}

#[test]
fn nonmutating_concat_composes() {
    let chained = concat(&Rope::from("1st"), &concat(&Rope::from("2nd"), &Rope::from("3rd")));
    assert_eq!(chained.len(), 9);
    assert_eq!(chained, "1st2nd3rd");
}

#[test]
fn substring_of_the_head_of_a_rope() {
    let rope = Rope::from("RopeTest2");
    let slice = rope.substring(0, 4).expect("range in bounds");
    assert_eq!(slice, "Rope");
    assert_eq!(rope, "RopeTest2");
}

#[test]
fn substring_results_are_ropes_in_their_own_right() {
    let mut rope = Rope::from("Rope Lhs,");
    rope.concat(&Rope::from("Rope Rhs"));

    let mut slice = rope.substring(5, 13).expect("range in bounds");
    assert_eq!(slice, "Lhs,Rope");
    assert_eq!(slice.at(0).expect("index in bounds"), b'L');
    slice.concat(&Rope::from("!"));
    assert_eq!(slice, "Lhs,Rope!");

    let nested = slice.substring(4, 8).expect("range in bounds");
    assert_eq!(nested, "Rope");
}

#[test]
fn errors_describe_the_violated_bounds() {
    let rope = Rope::from("RopeTest");
    let err = rope.at(42).expect_err("index past the end");
    assert_eq!(
        err.to_string(),
        "index 42 out of bounds for rope of length 8"
    );

    let err = rope.substring(2, 42).expect_err("range past the end");
    assert!(matches!(
        err,
        RopeError::RangeOutOfBounds {
            start: 2,
            end: 42,
            len: 8,
        }
    ));
}

#[test]
fn deep_concat_chains_stay_stack_safe() {
    let mut rope = Rope::new();
    for _ in 0..100_000 {
        rope.concat(&Rope::from("ab"));
    }
    assert_eq!(rope.len(), 200_000);
    assert_eq!(rope.at(0).expect("index in bounds"), b'a');
    assert_eq!(rope.at(199_999).expect("index in bounds"), b'b');
    assert_eq!(rope.linearized().len(), 200_000);
    assert_eq!(rope.bytes().count(), 200_000);
    assert_eq!(rope.bytes().rev().count(), 200_000);

    let middle = rope.substring(99_999, 100_003).expect("range in bounds");
    assert_eq!(middle, "baba");

    // Dropping the chain must not recurse through 100k joins.
    drop(rope);
}

/// Random walks over the API, checked against a flat `Vec<u8>` model.
#[test]
fn randomized_operations_match_a_flat_model() {
    let mut rng = StdRng::seed_from_u64(0x0b5e55ed);

    for _ in 0..64 {
        let mut rope = Rope::new();
        let mut model: Vec<u8> = Vec::new();

        for _ in 0..rng.gen_range(1..40) {
            match rng.gen_range(0..4u8) {
                // Append a fresh fragment.
                0 | 1 => {
                    let len = rng.gen_range(0..12);
                    let text: Vec<u8> = (0..len).map(|_| rng.gen_range(b'a'..=b'z')).collect();
                    rope.concat(&Rope::from(text.clone()));
                    model.extend_from_slice(&text);
                },
                // Replace the rope with a slice of itself.
                2 => {
                    let start = rng.gen_range(0..=model.len());
                    let end = rng.gen_range(start..=model.len());
                    rope = rope.substring(start, end).expect("range in bounds");
                    model = model[start..end].to_vec();
                },
                // Double the rope onto itself.
                3 => {
                    let other = rope.clone();
                    rope.concat(&other);
                    let copy = model.clone();
                    model.extend_from_slice(&copy);
                },
                _ => unreachable!(),
            }
        }

        assert_eq!(rope.len(), model.len());
        assert_eq!(rope.linearized(), model);
        assert!(rope.bytes().eq(model.iter().copied()));
        assert!(rope.bytes().rev().eq(model.iter().rev().copied()));

        for _ in 0..16 {
            if model.is_empty() {
                break;
            }
            let i = rng.gen_range(0..model.len());
            assert_eq!(rope.at(i).expect("index in bounds"), model[i]);
        }

        if !model.is_empty() {
            let start = rng.gen_range(0..=model.len());
            let end = rng.gen_range(start..=model.len());
            let slice = rope.substring(start, end).expect("range in bounds");
            assert_eq!(slice.linearized(), &model[start..end]);
        }
    }
}
