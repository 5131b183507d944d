use crate::config::SecretRef;
use crate::context::Context;
use crate::decode;
use crate::extract::{FieldExtractor, YqExtractor};
use crate::fetch::{KubectlFetcher, SecretFetcher};
use crate::render;
use anyhow::Result;
use std::path::PathBuf;

/// Handles the export pipeline: fetch, extract, decode, render, write
pub struct ExportCommand;

impl ExportCommand {
    /// Execute the export with the production collaborators
    pub fn execute(ctx: &Context, reference: &SecretRef) -> Result<()> {
        let fetcher = KubectlFetcher::new(ctx.command.clone());
        let extractor = YqExtractor::new(ctx.command.clone());

        Self::run(ctx, reference, &fetcher, &extractor)
    }

    fn run(
        ctx: &Context,
        reference: &SecretRef,
        fetcher: &dyn SecretFetcher,
        extractor: &dyn FieldExtractor,
    ) -> Result<()> {
        ctx.output.info("Fetching secret");
        ctx.output.key_value("Context", &reference.context);
        ctx.output.key_value("Namespace", &reference.namespace);
        ctx.output.key_value("Secret", &reference.secret);

        let manifest = fetcher.fetch_manifest(reference)?;
        let raw_data = extractor.extract_data(&manifest)?;

        let mut data = decode::parse_data(&raw_data)?;
        decode::decode_values(&mut data, ctx.output.as_ref());

        let rendered = render::render_manifest(reference, &data);
        let path = PathBuf::from(reference.output_file_name());
        ctx.fs.write(&path, &rendered)?;

        ctx.output
            .success(&format!("Wrote {}", path.display()));

        Ok(())
    }
}
