use proptest::prelude::*;

use crate::{dial, parse_instruction, process_input, reduce, Dial, CYCLE, START_POSITION};

fn strategies() -> impl proptest::strategy::Strategy<Value = dial::Strategy> {
    prop_oneof![
        Just(dial::Strategy::ExactZero),
        Just(dial::Strategy::CycleBonus),
        Just(dial::Strategy::Clicks),
    ]
}

// Property: a well-formed token parses to its magnitude, signed by direction
proptest! {
    #[test]
    fn prop_parse_signs_by_direction(n in 0..=i64::MAX, lower in any::<bool>()) {
        let (left, right) = if lower { ("l", "r") } else { ("L", "R") };
        prop_assert_eq!(parse_instruction(&format!("{right}{n}")), Ok(n));
        prop_assert_eq!(parse_instruction(&format!("{left}{n}")), Ok(-n));
    }
}

// Property: the position always stays on the dial
proptest! {
    #[test]
    fn prop_position_in_range(
        deltas in prop::collection::vec(any::<i64>(), 0..32),
        cycle in 1..1_000i64,
        start in any::<i64>(),
        strategy in strategies(),
    ) {
        let dial = Dial::new(cycle, start).unwrap();
        let state = dial.reduce(deltas, strategy);
        prop_assert!((0..cycle).contains(&state.position));
    }
}

// Property: the count is the number of prefixes whose running sum lands on zero
proptest! {
    #[test]
    fn prop_count_matches_zero_prefixes(deltas in prop::collection::vec(-500..500i64, 0..64)) {
        let expected = deltas
            .iter()
            .scan(START_POSITION, |sum, delta| {
                *sum += delta;
                Some(*sum)
            })
            .filter(|sum| sum.rem_euclid(CYCLE) == 0)
            .count();

        let state = reduce(deltas);
        prop_assert_eq!(state.count, expected as i64);
    }
}

// Property: the empty sequence is the identity of the fold
proptest! {
    #[test]
    fn prop_empty_tail_is_identity(
        deltas in prop::collection::vec(-1_000..1_000i64, 0..32),
        strategy in strategies(),
    ) {
        let dial = Dial::default();
        let state = dial.reduce(deltas, strategy);
        prop_assert_eq!(dial.reduce_from(state, [], strategy), state);
    }
}

// Property: splitting the input anywhere and resuming gives the same result
proptest! {
    #[test]
    fn prop_fold_resumes(
        deltas in prop::collection::vec(-1_000..1_000i64, 0..32),
        split in any::<prop::sample::Index>(),
        strategy in strategies(),
    ) {
        let dial = Dial::default();
        let at = split.index(deltas.len() + 1);
        let (head, tail) = deltas.split_at(at);

        let partial = dial.reduce(head.iter().copied(), strategy);
        let resumed = dial.reduce_from(partial, tail.iter().copied(), strategy);
        prop_assert_eq!(resumed, dial.reduce(deltas.iter().copied(), strategy));
    }
}

// Property: blank lines never change the outcome
proptest! {
    #[test]
    fn prop_blank_lines_are_ignored(
        deltas in prop::collection::vec(-300..300i64, 0..32),
        gaps in prop::collection::vec(
            prop_oneof![Just(""), Just("  "), Just("\t"), Just("\r"), Just("\x0c")],
            32,
        ),
    ) {
        let tokens: Vec<String> = deltas
            .iter()
            .map(|&d| if d < 0 { format!("L{}", -d) } else { format!("R{d}") })
            .collect();
        let dense = tokens.join("\n");
        let sparse: String = tokens
            .iter()
            .zip(&gaps)
            .map(|(token, gap)| format!("{gap}\n{token}\n"))
            .collect();

        let dial = Dial::default();
        let expected = process_input(&dense, dial, dial::Strategy::ExactZero).unwrap();
        let actual = process_input(&sparse, dial, dial::Strategy::ExactZero).unwrap();
        prop_assert_eq!(expected, actual);
        prop_assert_eq!(expected, reduce(deltas));
    }
}
