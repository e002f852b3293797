// End-to-end checks for the reporting pipeline: tree -> flatten ->
// aggregate -> extract -> verdict, driven through the public API only.

use tally::aggregate::RunSummary;
use tally::extract::{find_custom_message, reflow, WRAP_COLUMNS};
use tally::flatten::Leaves;
use tally::report::{OutputBuffer, OutputSink, ReportConfig, Reporter, SUCCESS_MESSAGE};
use tally::tree::{SuiteFile, SuiteNode, TestResult, TestState};

fn reporter() -> Reporter {
    Reporter::new(ReportConfig {
        wrap_columns: WRAP_COLUMNS,
        use_colors: false,
    })
}

#[test]
fn counting_partitions_every_leaf() {
    let states = [
        TestState::Pass,
        TestState::Fail,
        TestState::Todo,
        TestState::Skip,
        TestState::Pass,
        TestState::Fail,
        TestState::Skip,
    ];
    let tasks: Vec<SuiteNode> = states
        .iter()
        .enumerate()
        .map(|(i, &state)| SuiteNode::case(TestResult::new(format!("t{i}"), state)))
        .collect();
    let files = vec![SuiteFile::new("mixed.test", tasks)];

    let summary = RunSummary::collect(&files);
    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.todo, 1);
    // Skip leaves land in none of the three counters.
    assert_eq!(
        summary.passed + summary.failed + summary.todo,
        states.len() - 2
    );
}

#[test]
fn flatten_order_matches_declaration_order() {
    let roots = vec![
        SuiteNode::group(
            "level one",
            vec![SuiteNode::case(TestResult::new("A", TestState::Pass))],
        ),
        SuiteNode::case(TestResult::new("B", TestState::Pass)),
        SuiteNode::group(
            "level one again",
            vec![SuiteNode::group(
                "level two",
                vec![SuiteNode::case(TestResult::new("C", TestState::Pass))],
            )],
        ),
    ];

    let names: Vec<&str> = Leaves::new(&roots).map(|leaf| leaf.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);
}

#[test]
fn extractor_prefers_the_first_message_not_the_best_match() {
    let messages = vec![
        "foo: expected 1 to be 2".to_string(),
        r#"expect(x, "Custom A")  failed"#.to_string(),
    ];
    assert_eq!(find_custom_message(&messages).as_deref(), Some("foo"));
}

#[test]
fn wrapping_a_long_line_is_lossless_and_bounded() {
    // 140 columns of ASCII, single line.
    let message = "word ".repeat(28).trim_end().to_string();
    assert_eq!(message.len(), 139);

    let wrapped = reflow(&message, WRAP_COLUMNS);
    for line in wrapped.lines() {
        assert!(line.len() <= WRAP_COLUMNS);
        assert!(line.split_whitespace().all(|w| w == "word"));
    }
    assert_eq!(wrapped.replace('\n', " "), message);
}

#[test]
fn success_line_is_independent_of_suite_size() {
    for n in 1..6 {
        let tasks = (0..n)
            .map(|i| SuiteNode::case(TestResult::new(format!("t{i}"), TestState::Pass)))
            .collect();
        let files = vec![SuiteFile::new("clean.test", tasks)];

        let mut out = OutputBuffer::new();
        reporter().finish(&files, &mut out);
        assert_eq!(out.as_str(), SUCCESS_MESSAGE);
    }
}

#[test]
fn failing_run_surfaces_the_custom_assertion_message() {
    let files = vec![SuiteFile::new(
        "step-2.test",
        vec![
            SuiteNode::case(TestResult::new("t1", TestState::Pass)),
            SuiteNode::case(TestResult::failed(
                "t2",
                [r#"expect(true, "Add the missing import").toBe(false)"#],
            )),
            SuiteNode::case(TestResult::new("t3", TestState::Pass)),
        ],
    )];

    let mut out = OutputBuffer::new();
    let summary = reporter().finish(&files, &mut out);
    assert_eq!(summary.passed, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(out.as_str(), "Add the missing import");
}

#[test]
fn failing_run_without_extractable_message_prints_raw_text() {
    let files = vec![SuiteFile::new(
        "step-3.test",
        vec![SuiteNode::case(TestResult::failed(
            "t1",
            ["AssertionError: values differ"],
        ))],
    )];

    let mut out = OutputBuffer::new();
    reporter().finish(&files, &mut out);
    assert_eq!(out.as_str(), "AssertionError: values differ");
}

#[test]
fn long_custom_messages_come_out_wrapped() {
    let long = "Re-export the Button component from the barrel file so the page \
imports resolve without reaching into component folders";
    let raw = format!(r#"expect(ok, "{long}").toBe(true)"#);
    let files = vec![SuiteFile::new(
        "step-4.test",
        vec![SuiteNode::case(TestResult::failed("barrel", [raw]))],
    )];

    let mut out = OutputBuffer::new();
    reporter().finish(&files, &mut out);
    let rendered = out.as_str();
    assert!(rendered.contains('\n'));
    for line in rendered.lines() {
        assert!(line.len() <= WRAP_COLUMNS);
    }
    assert_eq!(rendered.replace('\n', " "), long);
}

#[test]
fn reporter_writes_exactly_once_per_run() {
    struct CountingSink {
        writes: usize,
    }
    impl OutputSink for CountingSink {
        fn emit(&mut self, _text: &str) {
            self.writes += 1;
        }
    }

    let failing = vec![SuiteFile::new(
        "f.test",
        vec![SuiteNode::case(TestResult::failed("t", ["oops: expected"]))],
    )];
    let silent = vec![SuiteFile::new(
        "s.test",
        vec![SuiteNode::case(TestResult::failed(
            "t",
            Vec::<String>::new(),
        ))],
    )];

    let mut sink = CountingSink { writes: 0 };
    reporter().finish(&failing, &mut sink);
    assert_eq!(sink.writes, 1);

    let mut sink = CountingSink { writes: 0 };
    reporter().finish(&silent, &mut sink);
    assert_eq!(sink.writes, 0);
}
