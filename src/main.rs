use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use env_logger::Env;
use survey_fixtures::{
    ImagePrompt, Question, load_questions_from_json, questions_with_image_prompt,
};

#[derive(Parser, Debug)]
#[command(version, about = "Print questionnaire fixture data as JSON", long_about = None)]
struct Args {
    /// JSON file to load the questions from instead of the built-in fixture
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Wording of the built-in image question
    #[arg(long, value_enum, default_value = "choose")]
    image_prompt: ImagePromptArg,

    /// Print one-line JSON instead of pretty-printing
    #[arg(long)]
    compact: bool,

    #[arg(short, long, default_value = "error")]
    log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ImagePromptArg {
    Choose,
    Upload,
}

impl From<ImagePromptArg> for ImagePrompt {
    fn from(arg: ImagePromptArg) -> Self {
        match arg {
            ImagePromptArg::Choose => ImagePrompt::Choose,
            ImagePromptArg::Upload => ImagePrompt::Upload,
        }
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str())).init();

    let questions: Vec<Question> = match &args.questions {
        Some(path) => match load_questions_from_json(path) {
            Ok(questions) => questions,
            Err(e) => {
                eprintln!("Error loading questions: {}", e);
                process::exit(1);
            }
        },
        None => questions_with_image_prompt(args.image_prompt.into()),
    };

    let json = if args.compact {
        serde_json::to_string(&questions)
    } else {
        serde_json::to_string_pretty(&questions)
    };

    match json {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing questions: {}", e);
            process::exit(1);
        }
    }
}
