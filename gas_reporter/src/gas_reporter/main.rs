//!
//! The gas reporter binary.
//!

pub(crate) mod arguments;

use clap::Parser;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let mut mean_table = gas_reporter::MeanTable::default();
    for toolchain in gas_reporter::Toolchain::ALL {
        let path = arguments.data_directory.join(toolchain.file_name());
        let report = gas_reporter::InputReport::try_from(path.as_path())?;
        mean_table.extend(toolchain, report);
    }

    let results = gas_reporter::Results::new(&mean_table);
    let markdown = gas_reporter::Markdown::from(&results);

    match arguments.output_path {
        Some(path) => markdown.write_to_file(path)?,
        None => print!("{markdown}"),
    }

    Ok(())
}
