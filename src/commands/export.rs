use crate::{
    catalog::Catalog,
    cli::ExportArgs,
    io::{
        dataset::JsonFileSource,
        export::{DirectorySink, ExportOutcome, FileSink},
    },
    utils::util::{format_number_with_commas, Result},
};

pub fn export(args: ExportArgs) -> Result<()> {
    let config = args.catalog_config()?;
    let source = JsonFileSource::new(&args.dataset.dataset);
    let catalog = Catalog::load(&source, config)?;

    match catalog.export()? {
        ExportOutcome::Ready(table) => {
            let sink = DirectorySink::new(&args.output_dir);
            let path = sink.save(&table.filename, &table.content, &table.mime_type)?;
            log::info!(
                "Exported {} options to {}",
                format_number_with_commas(table.row_count),
                path.display()
            );
        }
        ExportOutcome::Skipped => {}
    }
    Ok(())
}
