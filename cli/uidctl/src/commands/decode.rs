//! Decode command - validate text as an identifier type.
//!
//! Only canonical text is accepted. With `--collect`, a failure is printed as
//! a list of violations rather than a single error.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use uidnorm_codec::uidnorm_id::{AbstractUid, Uid, UidKind};
use uidnorm_codec::{Context, DenormalizationResult, Denormalized, Denormalizer};

use crate::error::CliError;
use crate::output::{print_field, print_json, print_violation, OutputFormat};

use super::CommandContext;

#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// Text to decode.
    text: String,

    /// Target type: AbstractUid, Uuid, NilUuid, UuidV1..UuidV7 or Ulid.
    #[arg(long = "type", short, default_value = "Uuid")]
    type_name: String,

    /// Report failures as collected violations.
    #[arg(long)]
    collect: bool,
}

#[derive(Debug, Serialize)]
struct Decoded {
    value: Uid,
    kind: UidKind,
}

impl DecodeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let context = Context {
            collect_invariant_violations: self.collect,
            ..Context::default()
        };

        let outcome = ctx
            .normalizer
            .denormalize(&self.text, &self.type_name, &context)
            .map_err(CliError::from)?;

        match outcome {
            Denormalized::Value(uid) => print_decoded(ctx.format, uid),
            Denormalized::Result(result) => print_result(ctx.format, &result)?,
        }

        Ok(())
    }
}

fn print_decoded(format: OutputFormat, uid: Uid) {
    match format {
        OutputFormat::Text => {
            print_field("value", &uid.to_canonical());
            print_field("kind", uid.kind().type_name());
        }
        OutputFormat::Json => print_json(&Decoded {
            value: uid,
            kind: uid.kind(),
        }),
    }
}

fn print_result(format: OutputFormat, result: &DenormalizationResult<Uid>) -> Result<()> {
    if format == OutputFormat::Json {
        print_json(result);
    }

    let Some(violations) = result.violations() else {
        if let (OutputFormat::Text, Some(uid)) = (format, result.value()) {
            print_decoded(format, *uid);
        }
        return Ok(());
    };

    if format == OutputFormat::Text {
        for (path, list) in violations {
            for violation in list {
                let cause = violation.cause().map(ToString::to_string);
                print_violation(path, violation.message(), cause.as_deref());
            }
        }
    }

    let count = violations.values().map(Vec::len).sum();
    Err(CliError::Violations { count }.into())
}
