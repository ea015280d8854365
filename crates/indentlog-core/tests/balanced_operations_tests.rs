#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::sync::Arc;

use common::depth_of;
use indentlog_core::format::render_params;
use indentlog_core::{IndentedLogger, Indentation, MemorySink, Params};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    StartScope,
    StartNamed,
    Log,
    End,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::StartScope),
        Just(Step::StartNamed),
        Just(Step::Log),
        Just(Step::End),
    ]
}

/// Run the steps, ignoring ends with nothing open, then close everything
fn run_balanced(logger: &mut IndentedLogger, steps: &[Step]) {
    for (i, step) in steps.iter().enumerate() {
        match step {
            Step::StartScope => logger.start_scope(),
            Step::StartNamed => logger.start_operation("OP", &format!("m{}", i)),
            Step::Log => logger.log_debug("LOG", "x"),
            Step::End => {
                if logger.open_operations() > 0 {
                    logger.end_operation().unwrap();
                }
            }
        }
    }
    while logger.open_operations() > 0 {
        logger.end_operation().unwrap();
    }
}

proptest! {
    #[test]
    fn prop_balanced_sequence_restores_depth(
        initial in 0usize..5,
        steps in prop::collection::vec(step(), 0..40),
    ) {
        let sink = Arc::new(MemorySink::new());
        let mut logger = IndentedLogger::with_indentation(sink, Indentation::at(initial), "prop");

        run_balanced(&mut logger, &steps);

        prop_assert_eq!(logger.depth(), initial);
        prop_assert_eq!(logger.open_operations(), 0);
    }

    #[test]
    fn prop_end_lines_match_start_depth(steps in prop::collection::vec(step(), 0..40)) {
        let sink = Arc::new(MemorySink::new());
        let mut logger = IndentedLogger::new(sink.clone(), "prop");

        run_balanced(&mut logger, &steps);

        let mut open: Vec<(String, usize)> = Vec::new();
        for line in sink.texts() {
            let body = line.trim_start();
            if let Some(rest) = body.strip_prefix("OP - start ") {
                open.push((rest.to_string(), depth_of(&line)));
            } else if let Some(rest) = body.strip_prefix("OP - end ") {
                let (message, depth) = open.pop().expect("end line without start line");
                let expected = format!("{} {{time (ms): \"", message);
                prop_assert!(rest.starts_with(&expected));
                prop_assert_eq!(depth_of(&line), depth);
            }
        }
        prop_assert!(open.is_empty());
    }

    #[test]
    fn prop_disabled_debug_emits_nothing(steps in prop::collection::vec(step(), 0..40)) {
        let sink = Arc::new(MemorySink::with_debug(false));
        let mut logger = IndentedLogger::new(sink.clone(), "prop");

        run_balanced(&mut logger, &steps);

        prop_assert!(sink.lines().is_empty());
        prop_assert_eq!(logger.depth(), 0);
    }

    #[test]
    fn prop_rendered_block_has_only_complete_pairs(
        pairs in prop::collection::vec(
            (prop::option::of("[a-z]{1,6}"), prop::option::of("[a-z0-9]{0,6}")),
            0..8,
        ),
    ) {
        let mut params = Params::new();
        for (name, value) in &pairs {
            params.push(name.clone(), value.clone());
        }
        let complete: Vec<String> = pairs
            .iter()
            .filter_map(|(n, v)| match (n, v) {
                (Some(n), Some(v)) => Some(format!("{}: \"{}\"", n, v)),
                _ => None,
            })
            .collect();

        let block = render_params(&params);
        if complete.is_empty() {
            prop_assert_eq!(block, "");
        } else {
            prop_assert_eq!(block, format!(" {{{}}}", complete.join(", ")));
        }
    }
}
