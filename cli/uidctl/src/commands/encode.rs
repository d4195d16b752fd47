//! Encode command - render an identifier in one or every format.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use uidnorm_codec::uidnorm_id::{AbstractUid, Uid, UidKind};
use uidnorm_codec::{Context, NormalizationFormat};

use crate::error::CliError;
use crate::output::{print_field, print_json, OutputFormat};

use super::CommandContext;

#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Identifier in canonical form (hyphenated UUID or 26-character ULID).
    id: String,

    /// Format to render: canonical, base_58, base_32 or rfc_4122.
    ///
    /// Defaults to UIDNORM_NORMALIZATION_FORMAT, or canonical.
    #[arg(long, short)]
    format: Option<String>,

    /// Render every format.
    #[arg(long, conflicts_with = "format")]
    all: bool,
}

#[derive(Debug, Serialize)]
struct Encoded {
    id: Uid,
    kind: UidKind,
    format: Option<String>,
    encoded: String,
}

#[derive(Debug, Serialize)]
struct EncodedAll {
    id: Uid,
    kind: UidKind,
    canonical: String,
    base_58: String,
    base_32: String,
    rfc_4122: String,
}

impl EncodeCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let uid: Uid = self.id.parse().map_err(|e| CliError::InvalidInput {
            input: self.id.clone(),
            reason: format!("{e}"),
        })?;

        if self.all {
            return encode_all(ctx, uid);
        }

        let context = match &self.format {
            Some(format) => Context::new().with_format(format.as_str()),
            None => Context::new(),
        };
        let encoded = ctx.normalizer.encode(&uid, &context).map_err(CliError::from)?;

        match ctx.format {
            OutputFormat::Text => println!("{}", encoded),
            OutputFormat::Json => print_json(&Encoded {
                id: uid,
                kind: uid.kind(),
                format: self.format,
                encoded,
            }),
        }

        Ok(())
    }
}

fn encode_all(ctx: &CommandContext, uid: Uid) -> Result<()> {
    let encode = |format: NormalizationFormat| {
        ctx.normalizer
            .encode(&uid, &Context::new().with_normalization_format(format))
            .map_err(CliError::from)
    };

    let all = EncodedAll {
        id: uid,
        kind: uid.kind(),
        canonical: encode(NormalizationFormat::Canonical)?,
        base_58: encode(NormalizationFormat::Base58)?,
        base_32: encode(NormalizationFormat::Base32)?,
        rfc_4122: encode(NormalizationFormat::Rfc4122)?,
    };

    match ctx.format {
        OutputFormat::Text => {
            print_field("kind", all.kind.type_name());
            print_field("canonical", &all.canonical);
            print_field("base_58", &all.base_58);
            print_field("base_32", &all.base_32);
            print_field("rfc_4122", &all.rfc_4122);
        }
        OutputFormat::Json => print_json(&all),
    }

    Ok(())
}
