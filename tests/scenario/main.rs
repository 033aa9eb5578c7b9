use std::{cell::RefCell, rc::Rc};

use multitest::{
    config::ReportConfig,
    formatter::pretty::{PrettyFormatter, summary},
    prelude::*,
};
use pretty_assertions::assert_eq;

mod lib;
use lib::{
    Buffer,
    stack::{ArrayStack, Stack, Subject, VecStack},
};

fn stack_multi_test() -> MultiTest<Subject> {
    let mut multi = MultiTest::new("stacks");
    multi.add_constructor("vec", || Box::new(VecStack::default()) as Subject);
    multi.add_constructor("array", || Box::new(ArrayStack::default()) as Subject);

    multi.add_test("push then pop", |stack: &mut Subject| -> Result<(), Raised> {
        stack.push(3);
        stack.push(4);
        assert_equals!(stack.pop()?, 4, "last in first out")?;
        assert_equals!(stack.len(), 1)?;
        Ok(())
    });
    multi.add_test_expecting("pop on empty", ErrorKind::Range, |stack: &mut Subject| {
        stack.pop()
    });
    multi.add_test("pop on empty throws", |stack: &mut Subject| {
        assert_throws(ErrorKind::Range, || stack.pop())
    });
    multi
}

#[test]
fn value_is_non_negative() {
    let mut multi = MultiTest::new("value");
    multi.add_constructor("zero-init", || 0_i32);
    multi.add_constructor("negative-init", || -1_i32);
    multi.add_test("value is non-negative", |value: &mut i32| {
        assert_true!(*value >= 0, "value is negative")
    });

    multi.run().unwrap();

    assert!(multi.is_finished());
    let reports: Vec<_> = multi.results_flat().iter().map(TestResult::report).collect();
    assert_eq!(
        reports,
        [
            "TEST \"value is non-negative\" ✓ passed.",
            "TEST \"value is non-negative\" ✕ failed in assertion. \
             Reason: value is negative (boolean assertion)",
        ]
    );
}

#[test]
fn stacks_are_classified_per_implementation() {
    let mut multi = stack_multi_test();
    multi.run().unwrap();

    assert_eq!(multi.constructor_names(), ["vec", "array"]);
    assert_eq!(multi.test_names().collect::<Vec<_>>(), [
        "push then pop",
        "pop on empty",
        "pop on empty throws"
    ]);

    let statuses: Vec<_> = multi.results_flat().iter().map(|r| r.status).collect();
    assert_eq!(statuses, [
        StatusCode::Passed,
        StatusCode::Passed,
        StatusCode::Passed,
        StatusCode::Passed,
        StatusCode::UnexpectedError,
        StatusCode::AssertionFailure,
    ]);

    let pop = multi.result(1, 1).unwrap();
    assert!(pop.failure_detail.starts_with("kind of error is not range error, test threw panic"));

    let throws = multi.result(1, 2).unwrap();
    assert!(
        throws
            .failure_detail
            .starts_with("Function didn't throw expected error kind \"range error\". Instead, it threw panic")
    );
}

#[test]
fn rendered_summary() {
    let mut multi = stack_multi_test();
    multi.run().unwrap();

    let out = Buffer::default();
    let mut formatter = PrettyFormatter::default()
        .with_target(out.clone())
        .with_config(&ReportConfig::from_toml_str("failures_only = true").unwrap());
    assert!(!formatter.use_color());
    formatter.fmt_multi_test(&multi).unwrap();

    let out = out.try_to_string().unwrap();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines[0], "Summary of multi test: \"stacks\"");
    assert_eq!(lines[1], "### Constructor 0: \"vec\" ###");
    assert_eq!(lines[2], "### Constructor 1: \"array\" ###");
    assert_eq!(lines[3], "   TEST \"pop on empty\" threw unexpected error");
    assert!(lines[4].starts_with("         Reason: kind of error is not range error"));
    assert_eq!(lines[5], "   TEST \"pop on empty throws\" failed in assertion");
    assert_eq!(lines.last(), Some(&"test result: FAILED. 4 passed; 2 failed"));
}

#[test]
fn colored_summary_matches_plain_summary() {
    let mut multi = stack_multi_test();
    multi.run().unwrap();

    let colored = Buffer::terminal();
    let mut formatter = PrettyFormatter::default().with_target(colored.clone());
    assert!(formatter.use_color());
    formatter.fmt_multi_test(&multi).unwrap();
    let colored = colored.try_to_string().unwrap();

    assert!(colored.contains('\x1b'));
    assert_eq!(lib::strip_ansi(&colored), summary(&multi, false).unwrap());
}

#[test]
fn color_setting_overrides_detection() {
    let result = TestResult::new("forced", StatusCode::Passed, "");

    let out = Buffer::default();
    let mut formatter = PrettyFormatter::default()
        .with_target(out.clone())
        .with_color_setting(true);
    formatter.fmt_result(&result).unwrap();
    assert!(out.try_to_string().unwrap().contains("\x1b[1;32mpassed\x1b[0m"));

    let out = Buffer::terminal();
    let mut formatter = PrettyFormatter::default()
        .with_target(out.clone())
        .with_color_setting(false);
    formatter.fmt_result(&result).unwrap();
    assert_eq!(out.try_to_string().unwrap(), "TEST \"forced\" passed\n");
}

#[test]
fn no_constructor_is_a_harness_error() {
    let mut multi: MultiTest<VecStack> = MultiTest::new("nothing to build");
    multi.add_test("len", |stack: &mut VecStack| assert_equals!(stack.len(), 0));

    let err = multi.run().unwrap_err();
    assert_eq!(err, HarnessError::NoConstructor);
    assert_eq!(summary(&multi, false).unwrap(), "Test \"nothing to build\" is not finished.\n");
}

#[test]
fn undefined_subjects_abort_the_run() {
    let constructed = Rc::new(RefCell::new(Vec::new()));

    let mut multi = MultiTest::new("undefined");
    for name in ["first", "second"] {
        let constructed = Rc::clone(&constructed);
        multi.add_fallible_constructor(name, move || {
            constructed.borrow_mut().push(name);
            (name == "first").then(VecStack::default)
        });
    }
    multi.add_test("empty", |stack: &mut VecStack| assert_equals!(stack.len(), 0));

    let err = multi.run().unwrap_err();
    assert_eq!(err.to_string(), "constructor \"second\" left one of the subjects undefined");
    assert_eq!(*constructed.borrow(), ["first", "second"]);
    assert_eq!(multi.results_flat().len(), 1);
    assert!(!multi.is_finished());
}

#[test]
fn default_constructor_for_stack() {
    let mut multi = MultiTest::<VecStack>::new("default").with_default_constructor();
    multi.add_test("starts empty", |stack: &mut VecStack| assert_equals!(stack.len(), 0));

    multi.run().unwrap();

    let grouped: Vec<_> = multi
        .results_by_constructor()
        .map(|block| (block.constructor, block.results.len()))
        .collect();
    assert_eq!(grouped, [("Default constructor", 1)]);
}
