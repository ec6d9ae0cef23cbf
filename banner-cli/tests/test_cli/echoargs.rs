use crate::add_test;
use crate::common::run;

// Test the argv line format, command name included
add_test!(reports_command_name_and_arguments, async {
    let output = run("echoargs", &["one", "two words", "--flag"]).await;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout_raw).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("argv[0]: "));
    assert_eq!(lines[1], "argv[1]: one");
    assert_eq!(lines[2], "argv[2]: two words");
    assert_eq!(lines[3], "argv[3]: --flag");
});

// Test that with no arguments only the command name is reported
add_test!(no_arguments_reports_only_program, async {
    let output = run("echoargs", &[]).await;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout_raw).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("argv[0]: "));
    assert!(stdout.ends_with('\n'));
});
