use std::{fs, path::PathBuf, time::Duration};

use arboard::Clipboard;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use ocr_answers::{AnswerClient, UploadSession, picker};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Image files to choose from; the first image becomes the upload
    image_paths: Vec<PathBuf>,

    /// Write the answers to a file with the same name as the input image
    #[arg(long)]
    text: bool,

    /// Copy the answers to the clipboard
    #[arg(long)]
    clip: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    let mut session = UploadSession::new();
    if let Some(file) = picker::pick_first(&args.image_paths)? {
        session.select(file);
    }

    let client = AnswerClient::new();

    // The loading indicator runs only while a request is actually in
    // flight; a missing selection fails before any network activity.
    let spinner = if session.selected().is_some() {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
        spinner.set_message("Uploading...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        Some(spinner)
    } else {
        None
    };

    let outcome = session.upload(&client).await.map(|a| a.answers.clone());
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match outcome {
        Ok(answers) => {
            println!("{}", answers);

            if args.text {
                if let Some(selected) = session.selected() {
                    let mut path = PathBuf::from(selected.display_name());
                    path.set_extension("txt");
                    fs::write(&path, &answers)?;
                }
            }

            if args.clip {
                match Clipboard::new() {
                    Ok(mut clipboard) => {
                        if let Err(e) = clipboard.set_text(&answers) {
                            eprintln!("Failed to copy to clipboard: {}", e);
                        }
                    }
                    Err(e) => eprintln!("Failed to initialize clipboard: {}", e),
                }
            }
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{}", e.notice());
        }
    }

    Ok(())
}
