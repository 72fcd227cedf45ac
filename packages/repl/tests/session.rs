use clap::Parser;
use metagen_repl::io::{ExitReason, TestHost};
use metagen_repl::{Config, ReplCore};

fn run_script(core: &mut ReplCore, lines: &[&str]) -> TestHost {
    let mut host = TestHost::with_script(lines.iter().copied());
    let reason = core.run(&mut host).unwrap();
    assert_eq!(reason, ExitReason::UserExit);
    host
}

#[test]
fn edit_and_generate() {
    let mut core = ReplCore::new();
    let host = run_script(
        &mut core,
        &[
            "set title.default Hello",
            "set openGraph.images[0].url https://example.com/og.png",
            "set robots.googleBot.max-snippet 50",
            "generate",
            "exit",
        ],
    );

    assert!(host.errors().is_empty(), "{:?}", host.errors());
    let code = host.code();
    assert_eq!(code.len(), 1);
    assert!(code[0].starts_with("export const metadata = {\n  \"metadataBase\": \"\","));
    assert!(code[0].contains("  \"title\": {\n    \"default\": \"Hello\",\n"));
    assert!(code[0].contains("\"url\": \"https://example.com/og.png\""));
    assert!(code[0].contains("\"max-snippet\": 50"));
}

#[test]
fn hidden_sections_are_still_generated() {
    let mut core = ReplCore::new();
    let host = run_script(
        &mut core,
        &[
            "set verification.google abc",
            "hide verification",
            "submit",
            "exit",
        ],
    );

    let code = host.code();
    assert_eq!(code.len(), 1);
    assert!(code[0].contains("\"google\": \"abc\""));
}

#[test]
fn configured_declaration_reaches_the_loop() {
    let config = Config::parse_from([
        "metagen",
        "--name",
        "pageMetadata",
        "--typed",
        "--indent",
        "4",
        "--set",
        "description=About us",
    ]);
    let mut core = ReplCore::with_session(config.build_session().unwrap());
    let host = run_script(&mut core, &["gen", "code", "exit"]);

    let code = host.code();
    assert_eq!(code.len(), 2);
    assert_eq!(code[0], code[1]);
    assert!(code[0].starts_with("export const pageMetadata: Metadata = {\n    \"metadataBase\""));
    assert!(code[0].contains("\n    \"description\": \"About us\",\n"));
}

#[test]
fn get_shows_written_values() {
    let mut core = ReplCore::new();
    let host = run_script(&mut core, &["set twitter.images.3 extra", "get twitter.images", "exit"]);

    assert!(host.errors().is_empty());
    let text = host.output_text();
    assert!(text.contains("null"));
    assert!(text.contains("extra"));
    assert_eq!(
        core.session().metadata().get(&metagen_core_store::path!("twitter.images.2")),
        Some(&metagen_core_store::Value::Null)
    );
}
