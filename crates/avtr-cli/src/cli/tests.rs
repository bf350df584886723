use super::*;
use avtr_core::{Avtr, AvtrConfig};
use clap::CommandFactory;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

fn url_args(args: &[&str]) -> UrlArgs {
    match parse(args) {
        CliCommand::Url(url_args) => url_args,
        _ => panic!("expected Url"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn cli_parse_url_identity_only() {
    let args = url_args(&["avtr", "url", "email@test.com"]);
    assert_eq!(args.identity.as_deref(), Some("email@test.com"));
    assert!(args.format.is_none());
    assert!(!args.rounded_corners);
}

#[test]
fn cli_parse_url_without_identity() {
    let args = url_args(&["avtr", "url"]);
    assert!(args.identity.is_none());
    assert_eq!(
        commands::run_url(&AvtrConfig::default(), &args).unwrap(),
        "https://avtr.io/avtr.png"
    );
}

#[test]
fn cli_parse_url_negative_numbers() {
    let args = url_args(&[
        "avtr",
        "url",
        "JW",
        "--size",
        "-100",
        "--letter-count",
        "-69",
        "--background",
        "-1000,-1,-2,-12",
    ]);
    assert_eq!(args.size, Some(-100));
    assert_eq!(args.letter_count, Some(-69));
    let bg = args.background.unwrap();
    assert_eq!((bg.r, bg.g, bg.b), (-1000, -1, -2));
    assert_eq!(bg.a, -12.0);
}

#[test]
fn cli_parse_config() {
    match parse(&["avtr", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["avtr", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    match parse(&["avtr", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn cli_rejects_bad_colour() {
    assert!(Cli::try_parse_from(["avtr", "url", "JW", "--color", "red"]).is_err());
}

#[test]
fn url_command_matches_library_chain() {
    let args = url_args(&[
        "avtr",
        "url",
        "Jamosaur",
        "--font",
        "open-sans",
        "--font-weight",
        "100",
        "--text-case",
        "lower",
        "--theme",
        "flat",
        "--shape",
        "square",
        "--rounded-corners",
        "--size",
        "500",
        "--format",
        "jpg",
        "--background",
        "0,0,0,1",
        "--color",
        "255,69,0",
    ]);
    let from_cli = commands::run_url(&AvtrConfig::default(), &args).unwrap();

    let mut avtr = Avtr::new("Jamosaur");
    avtr.font("open-sans")
        .unwrap()
        .font_weight(100)
        .text_case("lower")
        .unwrap()
        .theme("flat")
        .unwrap()
        .shape("square")
        .unwrap()
        .rounded_corners(true)
        .size(500)
        .format("jpg")
        .unwrap()
        .background(0, 0, 0, 1.0)
        .color(255, 69, 0, 1.0);
    assert_eq!(from_cli, avtr.to_url());
}

#[test]
fn url_command_surfaces_validation_errors() {
    let args = url_args(&["avtr", "url", "JW", "--shape", "triangle"]);
    let err = commands::run_url(&AvtrConfig::default(), &args).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("--shape"));
    assert!(msg.contains("invalid shape 'triangle'"));
}

#[test]
fn url_command_uses_configured_endpoint() {
    let cfg = AvtrConfig {
        endpoint: "http://localhost:8080/avatar".to_string(),
        default_format: None,
    };
    let args = url_args(&["avtr", "url", "Ada Lovelace", "--format", "gif"]);
    assert_eq!(
        commands::run_url(&cfg, &args).unwrap(),
        "http://localhost:8080/avatar.gif?first_name=Ada&last_name=Lovelace"
    );
}
