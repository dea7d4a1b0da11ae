use super::support::{sample_root, write_source, SAMPLE_TREE};
use clap::Parser;
use vfsh::commands::Outcome;
use vfsh::repl;
use vfsh::shell::Shell;
use vfsh::tooling::cli::{Cli, CliContext};

fn run(shell: &mut Shell, line: &str) -> Outcome {
    shell
        .execute_line_with(line, |name| (name == "DOCS").then(|| "/docs".to_string()))
        .expect("line is not blank")
}

#[test]
fn navigate_and_inspect() {
    let mut shell = Shell::new("vfs", sample_root());

    assert_eq!(run(&mut shell, "ls").result().out, "docs/\nother/\nbin.dat");
    assert!(run(&mut shell, "cd $DOCS/guide").result().ok());
    assert_eq!(run(&mut shell, "pwd").result().out, "/docs/guide");
    assert_eq!(run(&mut shell, "ls ../a.txt").result().out, "hello");
    assert_eq!(run(&mut shell, "wc -c /bin.dat").result().out, "4 /bin.dat");
    assert_eq!(shell.prompt(), "vfs:/docs/guide$ ");
}

#[test]
fn failed_cd_keeps_cwd_valid() {
    let mut shell = Shell::new("vfs", sample_root());
    run(&mut shell, "cd docs");

    let miss = run(&mut shell, "cd ../nowhere");
    assert_eq!(miss.result().err, "cd: no such file or directory: ../nowhere");
    let file = run(&mut shell, "cd a.txt");
    assert_eq!(file.result().err, "cd: not a directory: a.txt");

    assert_eq!(shell.session().cwd(), "/docs");
    assert!(shell.session().resolve(".").unwrap().is_directory());
}

#[test]
fn empty_tree_shell_stays_usable() {
    let mut shell = Shell::new("vfs", vfsh::tree::load(std::path::Path::new("/nonexistent")));
    let listing = run(&mut shell, "ls");
    assert!(listing.result().ok());
    assert!(listing.result().out.is_empty());
    assert!(!run(&mut shell, "cd docs").result().ok());
    assert!(run(&mut shell, "exit").is_exit());
}

#[test]
fn script_playback_end_to_end() {
    let (temp, source) = write_source(SAMPLE_TREE);
    let script = temp.path().join("startup.vsh");
    std::fs::write(&script, "# tour\ncd docs\nls\nwc a.txt\nexit\nls\n").unwrap();

    let cli = Cli::try_parse_from([
        "vfsh",
        "--vfs",
        source.to_str().unwrap(),
        "--name",
        "demo",
    ])
    .unwrap();
    let context = CliContext::new(&cli, temp.path().to_path_buf()).unwrap();
    let mut shell = context.build_shell();

    let mut out = Vec::new();
    let mut err = Vec::new();
    repl::run_script(&mut shell, &script, &mut out, &mut err).unwrap();

    let out = String::from_utf8(out).unwrap();
    assert_eq!(
        out,
        "demo:/$ cd docs\n\
         demo:/docs$ ls\n\
         a.txt\n\
         guide/\n\
         demo:/docs$ wc a.txt\n\
         0 1 5 a.txt\n\
         demo:/docs$ exit\n\
         Exiting shell...\n"
    );
    assert!(err.is_empty());
}
