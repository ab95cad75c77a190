use anyhow::{Context, Result, bail};
use chaincode_config::Config;
use chaincode_engine::{
    Chain, Notation, decode_array, escape, forward_nodes, image_urls, unescape, video_urls,
};
use serde::Serialize;
use std::{env, io::Read, path::PathBuf, process};

const USAGE: &str = "\
Usage: chaincode-cli [--config PATH] <command>

Commands:
  parse [MESSAGE]                          inline message -> JSON summary
  render [JSON]                            array message -> inline message
  forward --uin N --name NAME MESSAGE...   build a forward message
  escape TEXT                              escape an attribute value
  unescape TEXT                            unescape an attribute value

MESSAGE and JSON are read from stdin when omitted.";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Parse(Option<String>),
    Render(Option<String>),
    Forward {
        uin: i64,
        name: String,
        messages: Vec<String>,
    },
    Escape(String),
    Unescape(String),
}

#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    config_path: Option<PathBuf>,
    command: Command,
}

#[derive(Serialize)]
struct ParseReport<'a> {
    chain: &'a Chain,
    mention_all: bool,
    mentions: Vec<i64>,
    images: Vec<&'a str>,
    videos: Vec<&'a str>,
}

fn parse_args(args: &[String]) -> Result<Invocation> {
    let mut rest = args.iter();
    let mut config_path = None;

    let name = loop {
        match rest.next().map(String::as_str) {
            Some("--config") => {
                let path = rest.next().context("--config needs a path")?;
                config_path = Some(PathBuf::from(path));
            }
            Some(name) => break name,
            None => bail!("missing command"),
        }
    };
    let operands: Vec<String> = rest.cloned().collect();

    let command = match name {
        "parse" => Command::Parse(single_optional(&operands)?),
        "render" => Command::Render(single_optional(&operands)?),
        "escape" => Command::Escape(single_required(&operands)?),
        "unescape" => Command::Unescape(single_required(&operands)?),
        "forward" => parse_forward(&operands)?,
        other => bail!("unknown command {other:?}"),
    };

    Ok(Invocation {
        config_path,
        command,
    })
}

fn single_optional(operands: &[String]) -> Result<Option<String>> {
    match operands {
        [] => Ok(None),
        [one] => Ok(Some(one.clone())),
        _ => bail!("expected at most one argument"),
    }
}

fn single_required(operands: &[String]) -> Result<String> {
    single_optional(operands)?.context("expected one argument")
}

fn parse_forward(operands: &[String]) -> Result<Command> {
    let mut uin = None;
    let mut name = None;
    let mut messages = Vec::new();

    let mut iter = operands.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--uin" => {
                let value = iter.next().context("--uin needs a value")?;
                uin = Some(
                    value
                        .parse::<i64>()
                        .with_context(|| format!("invalid --uin {value:?}"))?,
                );
            }
            "--name" => name = Some(iter.next().context("--name needs a value")?.clone()),
            _ => messages.push(arg.clone()),
        }
    }

    Ok(Command::Forward {
        uin: uin.context("forward needs --uin")?,
        name: name.context("forward needs --name")?,
        messages,
    })
}

fn read_input(operand: Option<String>) -> Result<String> {
    match operand {
        Some(value) => Ok(value),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}

fn load_notation(config_path: Option<&PathBuf>) -> Result<Notation> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file {} not found", path.display()))?,
        None => Config::load()?.unwrap_or_default(),
    };
    log::debug!("Using tag prefix {:?}", config.prefix);
    Ok(config.notation()?)
}

fn execute(notation: &Notation, command: Command) -> Result<String> {
    let output = match command {
        Command::Parse(message) => {
            let raw = read_input(message)?;
            let chain = notation.parse(&raw)?;
            let report = ParseReport {
                chain: &chain,
                mention_all: notation.has_mention_all(&raw),
                mentions: notation.mentioned_ids(&chain)?,
                images: image_urls(&chain),
                videos: video_urls(&chain),
            };
            serde_json::to_string_pretty(&report)?
        }
        Command::Render(json) => {
            let chain = decode_array(&read_input(json)?)?;
            notation.render(&chain)
        }
        Command::Forward {
            uin,
            name,
            messages,
        } => serde_json::to_string_pretty(&forward_nodes(uin, &name, &messages))?,
        Command::Escape(text) => escape(&text).into_owned(),
        Command::Unescape(text) => unescape(&text).into_owned(),
    };
    Ok(output)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    let notation = load_notation(invocation.config_path.as_ref())?;
    println!("{}", execute(&notation, invocation.command)?);
    Ok(())
}
