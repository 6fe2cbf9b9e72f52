//! Evaluates one binary expression over abstract values.
//!
//! ```bash
//! cargo run --example evaluate -- '[1..5]' '<' 10
//! cargo run --example evaluate -- '1,2' + '10,20'
//! cargo run --example evaluate -- array:3 + 5 --reject-array-arithmetic
//! ```
//!
//! Operand syntax (a comma-separated list is a set of possible values):
//!
//! - `null`, `true`, `false`, `42`, `2.5`, `"text"` or `'text'`
//! - `[1..5]` integer interval, `[0.5..2.5]` float interval
//! - `any`, `any-int`, `any-float`, `any-numeric`, `any-scalar`, `any-bool`, `any-string`,
//!   `any-compound`, `any-array`, `any-object`, `any-resource`
//! - `array` (non-empty) or `array:N` with `N` elements, `object`, `resource`

use clap::Parser;
use color_eyre::eyre::{bail, eyre, WrapErr};
use color_eyre::Result;
use log::info;

use php_binop::config::{ArrayArithmeticPolicy, EvaluatorConfig};
use php_binop::context::Snapshot;
use php_binop::evaluator::Evaluator;
use php_binop::operator::Operator;
use php_binop::value::{AnyKind, Value};
use php_binop::value_set::ValueSet;

#[derive(Parser)]
#[command(author, version, about = "Abstract evaluation of a PHP binary operator")]
struct Cli {
    /// Left operand
    #[arg(allow_hyphen_values = true)]
    left: String,

    /// Operator, e.g. `+`, `===`, `<=`, `xor`
    op: String,

    /// Right operand
    #[arg(allow_hyphen_values = true)]
    right: String,

    /// Fail on arithmetic with an array instead of warning
    #[arg(long)]
    reject_array_arithmetic: bool,

    /// Keep every result of a set evaluation
    #[arg(long)]
    no_collapse: bool,

    /// Do not combine two strings byte by byte in `&`, `|`, `^`
    #[arg(long)]
    no_bytewise_strings: bool,

    /// Log every dispatch step
    #[arg(short, long)]
    verbose: bool,
}

fn parse_value(s: &str, snapshot: &mut Snapshot) -> Result<Value> {
    let s = s.trim();
    if let Some(kind) = s.strip_prefix("any") {
        let kind = match kind {
            "" => AnyKind::Value,
            "-int" => AnyKind::Int,
            "-float" => AnyKind::Float,
            "-numeric" => AnyKind::Numeric,
            "-scalar" => AnyKind::Scalar,
            "-bool" => AnyKind::Bool,
            "-string" => AnyKind::String,
            "-compound" => AnyKind::Compound,
            "-array" => AnyKind::Array,
            "-object" => AnyKind::Object,
            "-resource" => AnyKind::Resource,
            _ => bail!("unknown abstract value `{}`", s),
        };
        return Ok(Value::any(kind));
    }
    if let Some(len) = s.strip_prefix("array:") {
        let len = len.parse().wrap_err_with(|| format!("bad array length in `{}`", s))?;
        return Ok(snapshot.new_array(len));
    }
    if let Some(range) = s.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        let (lo, hi) = range.split_once("..").ok_or_else(|| eyre!("bad interval `{}`", s))?;
        let (lo, hi) = (lo.trim(), hi.trim());
        if let (Ok(lo), Ok(hi)) = (lo.parse::<i32>(), hi.parse::<i32>()) {
            if lo > hi {
                bail!("empty interval `{}`", s);
            }
            return Ok(Value::int_interval(lo, hi));
        }
        let lo: f64 = lo.parse().wrap_err_with(|| format!("bad interval bound in `{}`", s))?;
        let hi: f64 = hi.parse().wrap_err_with(|| format!("bad interval bound in `{}`", s))?;
        if !(lo <= hi) {
            bail!("empty interval `{}`", s);
        }
        return Ok(Value::float_interval(lo, hi));
    }
    for quote in ['"', '\''] {
        if let Some(text) = s.strip_prefix(quote).and_then(|t| t.strip_suffix(quote)) {
            return Ok(Value::string(text));
        }
    }
    let value = match s {
        "null" => Value::Null,
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "array" => snapshot.new_array(1),
        "object" => snapshot.new_object(),
        "resource" => snapshot.new_resource(),
        _ => {
            if let Ok(i) = s.parse::<i32>() {
                Value::Int(i)
            } else {
                let f: f64 = s.parse().wrap_err_with(|| format!("cannot parse operand `{}`", s))?;
                Value::float(f)
            }
        }
    };
    Ok(value)
}

fn parse_set(s: &str, snapshot: &mut Snapshot) -> Result<ValueSet> {
    s.split(',').map(|part| parse_value(part, snapshot)).collect()
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let config = EvaluatorConfig {
        array_arithmetic: if args.reject_array_arithmetic {
            ArrayArithmeticPolicy::Reject
        } else {
            ArrayArithmeticPolicy::Warn
        },
        collapse_results: !args.no_collapse,
        bytewise_strings: !args.no_bytewise_strings,
    };
    let evaluator = Evaluator::with_config(config);

    let mut snapshot = Snapshot::new();
    let op: Operator = args.op.parse()?;
    let left = parse_set(&args.left, &mut snapshot)?;
    let right = parse_set(&args.right, &mut snapshot)?;
    info!("evaluating {} {} {}", left, op, right);

    let result = match (left.as_singleton(), right.as_singleton()) {
        (Some(l), Some(r)) => ValueSet::singleton(evaluator.evaluate(&mut snapshot, l, op, r)?),
        _ => evaluator.evaluate_all(&mut snapshot, &left, op, &right)?,
    };

    println!("{} {} {} = {}", left, op, right, result);
    for warning in snapshot.warnings() {
        println!("warning: {}", warning);
    }

    Ok(())
}
