use crate::color::RGBColorFormat;
use crate::image::writer::header::HeaderDialect;
use crate::options::{
    CANVAS_HEIGHT, CANVAS_WIDTH, LETTERBOX_COLOR, TRANSPARENCY_COLOR, VALUES_PER_LINE,
};
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_inputs_argument(command);
        let command = Self::register_output_directory_argument(command);
        let command = Self::register_canvas_size_arguments(command);
        let command = Self::register_color_arguments(command);
        let command = Self::register_values_per_line_argument(command);
        let command = Self::register_dialect_argument(command);
        Self::register_threads_argument(command)
    }

    fn register_inputs_argument(command: Command) -> Command {
        command.arg(Self::create_inputs_argument())
    }

    fn register_output_directory_argument(command: Command) -> Command {
        command.arg(Self::create_output_directory_argument())
    }

    fn register_canvas_size_arguments(command: Command) -> Command {
        command
            .arg(Self::create_width_argument())
            .arg(Self::create_height_argument())
    }

    fn register_color_arguments(command: Command) -> Command {
        command
            .arg(Self::create_letterbox_color_argument())
            .arg(Self::create_transparency_color_argument())
    }

    fn register_values_per_line_argument(command: Command) -> Command {
        command.arg(Self::create_values_per_line_argument())
    }

    fn register_dialect_argument(command: Command) -> Command {
        command.arg(Self::create_dialect_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_inputs_argument() -> Arg {
        Arg::new("inputs")
            .help("Image files or directories containing images")
            .value_parser(value_parser!(PathBuf))
            .num_args(1..)
            .required(true)
    }

    fn create_output_directory_argument() -> Arg {
        arg!(output_directory: -o --output_directory <DIR> "Directory for generated header files")
            .default_value(".")
            .value_parser(value_parser!(PathBuf))
    }

    fn create_width_argument() -> Arg {
        arg!(width: -W --width <PIXELS> "Canvas width before rotation")
            .default_value(CANVAS_WIDTH.to_string())
            .value_parser(value_parser!(u32).range(1..))
    }

    fn create_height_argument() -> Arg {
        arg!(height: -H --height <PIXELS> "Canvas height before rotation")
            .default_value(CANVAS_HEIGHT.to_string())
            .value_parser(value_parser!(u32).range(1..))
    }

    fn create_letterbox_color_argument() -> Arg {
        arg!(letterbox_color: --letterbox_color <RRGGBB> "Border color of letterboxed images")
            .default_value(LETTERBOX_COLOR.to_string())
            .value_parser(parse_color)
    }

    fn create_transparency_color_argument() -> Arg {
        arg!(transparency_color: --transparency_color <RRGGBB> "Background for transparent pixels")
            .default_value(TRANSPARENCY_COLOR.to_string())
            .value_parser(parse_color)
    }

    fn create_values_per_line_argument() -> Arg {
        arg!(values_per_line: -v --values_per_line <COUNT> "Pixel values per line in the array")
            .default_value(VALUES_PER_LINE.to_string())
            .value_parser(value_parser!(u16).range(1..))
    }

    fn create_dialect_argument() -> Arg {
        arg!(dialect: -d --dialect <DIALECT> "Header dialect")
            .default_value("Arduino")
            .value_parser(value_parser!(HeaderDialect))
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            inputs: Self::extract_inputs_argument(matches),
            output_directory: Self::extract_output_directory_argument(matches),
            canvas_width: Self::extract_width_argument(matches),
            canvas_height: Self::extract_height_argument(matches),
            letterbox_color: Self::extract_letterbox_color_argument(matches),
            transparency_color: Self::extract_transparency_color_argument(matches),
            values_per_line: Self::extract_values_per_line_argument(matches),
            dialect: Self::extract_dialect_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
        }
    }

    fn extract_inputs_argument(matches: &ArgMatches) -> Vec<PathBuf> {
        matches
            .get_many::<PathBuf>("inputs")
            .expect("Required argument inputs not provided")
            .cloned()
            .collect()
    }

    fn extract_output_directory_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_directory")
            .expect("Output directory must be provided, but was unset.")
            .clone()
    }

    fn extract_width_argument(matches: &ArgMatches) -> u32 {
        matches
            .get_one::<u32>("width")
            .expect("Width must be provided, but was unset.")
            .to_owned()
    }

    fn extract_height_argument(matches: &ArgMatches) -> u32 {
        matches
            .get_one::<u32>("height")
            .expect("Height must be provided, but was unset.")
            .to_owned()
    }

    fn extract_letterbox_color_argument(matches: &ArgMatches) -> RGBColorFormat<u8> {
        matches
            .get_one::<RGBColorFormat<u8>>("letterbox_color")
            .expect("Letterbox color must be provided, but was unset.")
            .to_owned()
    }

    fn extract_transparency_color_argument(matches: &ArgMatches) -> RGBColorFormat<u8> {
        matches
            .get_one::<RGBColorFormat<u8>>("transparency_color")
            .expect("Transparency color must be provided, but was unset.")
            .to_owned()
    }

    fn extract_values_per_line_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<u16>("values_per_line")
            .expect("Values per line must be provided, but was unset.")
            .to_owned() as usize
    }

    fn extract_dialect_argument(matches: &ArgMatches) -> HeaderDialect {
        matches
            .get_one::<HeaderDialect>("dialect")
            .expect("Header dialect must be provided, but was unset.")
            .to_owned()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_color(value: &str) -> Result<RGBColorFormat<u8>, String> {
    value.parse()
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}
