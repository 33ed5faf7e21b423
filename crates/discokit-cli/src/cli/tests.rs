use super::config::{Config, OutputFormat, Task};
use super::run;
use chrono::DateTime;
use discokit::Snowflake;
use serde_json::{Value, json};

fn output(config: &Config) -> anyhow::Result<String> {
    let mut out = Vec::new();
    run(config, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn json_lines(text: &str) -> Vec<Value> {
    text.lines()
        .map(|line| serde_json::from_str(line).expect("json line"))
        .collect()
}

fn mention_task(tokens: &[&str], keep_going: bool) -> Task {
    Task::Mention {
        tokens: tokens.iter().map(|t| t.to_string()).collect(),
        keep_going,
    }
}

#[test]
fn mention_text_report() {
    let config = Config {
        format: OutputFormat::Text,
        utc: true,
        task: mention_task(&["<@!80351110224678912>"], false),
    };
    let text = output(&config).expect("run");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "<@!80351110224678912>");
    assert!(lines[1].trim_start().starts_with("kind"));
    assert!(lines[1].ends_with(" user"));
    assert!(lines[2].ends_with(" 80351110224678912"));
    assert!(lines[3].ends_with(" 2015-08-10T17:26:37Z"));
    assert!(lines[4].ends_with(" <@80351110224678912>"));
    assert_eq!(lines.len(), 5);
}

#[test]
fn mention_text_lists_attributes() {
    let config = Config {
        format: OutputFormat::Text,
        utc: true,
        task: mention_task(&["<t:1618953630:d>"], false),
    };
    let text = output(&config).expect("run");
    assert!(text.contains("timestamp"));
    assert!(text.contains(" 1618953630\n"));
    assert!(text.contains(" d\n"));
    assert!(!text.contains("created"));
}

#[test]
fn mention_json_report() {
    let config = Config {
        format: OutputFormat::Json,
        utc: true,
        task: mention_task(&["</airhorn:816437322781949972>", "<id:guide>"], false),
    };
    let reports = json_lines(&output(&config).expect("run"));
    assert_eq!(
        reports,
        [
            json!({
                "input": "</airhorn:816437322781949972>",
                "kind": "slash_command",
                "id": "816437322781949972",
                "attributes": {"command": "airhorn"},
                "created": Snowflake::from_raw(816_437_322_781_949_972)
                    .format_time_in(&chrono::Utc),
                "canonical": "</airhorn:816437322781949972>",
            }),
            json!({
                "input": "<id:guide>",
                "kind": "guild_navigation",
                "attributes": {"guild_navigation_type": "guide"},
                "canonical": "<id:guide>",
            }),
        ]
    );
}

#[test]
fn stops_at_first_invalid_token() {
    let config = Config {
        format: OutputFormat::Json,
        utc: true,
        task: mention_task(&["<#103735883630395392>", "<@22>", "<id:guide>"], false),
    };
    let mut out = Vec::new();
    let err = run(&config, &mut out).unwrap_err();
    assert_eq!(format!("{err:#}"), "`<@22>`: is not a valid mention");
    assert_eq!(json_lines(&String::from_utf8(out).expect("utf8")).len(), 1);
}

#[test]
fn keep_going_reports_failures() {
    let config = Config {
        format: OutputFormat::Json,
        utc: true,
        task: mention_task(&["<@22>", "<id:guide>"], true),
    };
    let reports = json_lines(&output(&config).expect("run"));
    assert_eq!(reports.len(), 2);
    assert_eq!(
        reports[0],
        json!({"input": "<@22>", "error": "is not a valid mention"})
    );
    assert_eq!(reports[1]["kind"], "guild_navigation");
}

#[test]
fn snowflake_json_report() {
    let config = Config {
        format: OutputFormat::Json,
        utc: true,
        task: Task::Snowflake {
            ids: vec![Snowflake::from_raw(1_218_325_944_931_192_904)],
            layout: true,
        },
    };
    let reports = json_lines(&output(&config).expect("run"));
    assert_eq!(
        reports,
        [json!({
            "id": "1218325944931192904",
            "created": "2024-03-15T22:32:20Z",
            "unix_millis": 1_710_541_940_673u64,
            "timestamp": 290_471_540_673u64,
            "worker_id": 2,
            "process_id": 1,
            "increment": 72,
        })]
    );
}

#[test]
fn snowflake_text_layout() {
    let config = Config {
        format: OutputFormat::Text,
        utc: true,
        task: Task::Snowflake {
            ids: vec![
                Snowflake::from_raw(1_218_325_944_931_192_904),
                Snowflake::from_raw(80_351_110_224_678_912),
            ],
            layout: true,
        },
    };
    let text = output(&config).expect("run");
    assert!(text.starts_with("1218325944931192904\n"));
    assert!(text.contains("2024-03-15T22:32:20Z"));
    assert!(text.contains("raw id     : 0x10e85cfdf0441048"));
    assert!(text.contains("timestamp (42)"));
    assert!(text.lines().any(|line| line == "80351110224678912"));
    assert_eq!(text.lines().filter(|line| *line == "}").count(), 2);
    assert!(text.ends_with("}\n"));
}

#[test]
fn generate_from_instant() {
    let at = DateTime::parse_from_rfc3339("2024-03-16T02:32:20.673+04:00").expect("rfc3339");
    let config = Config {
        format: OutputFormat::Json,
        utc: true,
        task: Task::Generate { at: Some(at) },
    };
    let reports = json_lines(&output(&config).expect("run"));
    assert_eq!(reports[0]["timestamp"], 290_471_540_673u64);
    assert_eq!(reports[0]["worker_id"], 0);
    assert_eq!(reports[0]["increment"], 0);
    assert_eq!(reports[0]["created"], "2024-03-15T22:32:20Z");
}

#[test]
fn generate_defaults_to_now() {
    let config = Config {
        format: OutputFormat::Json,
        utc: true,
        task: Task::Generate { at: None },
    };
    let reports = json_lines(&output(&config).expect("run"));
    assert!(reports[0]["timestamp"].as_u64().expect("timestamp") > 290_471_540_673);
}
