//! Interactive sentiment classification demo for Portuguese text.
//!
//! Thin presentation layer over the inference engine: load the model
//! bundle once at startup, then classify a single `--text` argument or
//! lines read interactively from stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use sentimento_ai::{CLASSIFIER_FILE, ModelBundle, Prediction, SentimentEngine, VECTORIZER_FILE};
use sentimento_core::{NEGATIVE, POSITIVE};

#[derive(Parser)]
#[command(
    name = "sentimento",
    about = "Classificador de sentimentos em português",
    version
)]
struct Args {
    /// Directory holding the model artifacts (vectorizer.json and
    /// classifier.json).
    #[arg(long, env = "SENTIMENTO_MODEL_DIR", default_value = "saved_models")]
    model_dir: PathBuf,

    /// Classify one text and exit instead of reading from stdin.
    #[arg(long)]
    text: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    // One explicit load at startup; on failure the process keeps serving,
    // answering every request with the model-error state.
    let engine = match ModelBundle::load(&args.model_dir) {
        Ok(bundle) => SentimentEngine::new(bundle),
        Err(err) => {
            tracing::error!(
                error = %err,
                dir = %args.model_dir.display(),
                "failed to load sentiment model"
            );
            eprintln!(
                "Erro: modelo não encontrado ou inválido em `{}`.",
                args.model_dir.display()
            );
            eprintln!(
                "Verifique se `{VECTORIZER_FILE}` e `{CLASSIFIER_FILE}` estão nessa pasta."
            );
            SentimentEngine::degraded()
        }
    };

    if let Some(text) = &args.text {
        print_result(engine.classify(text));
        return Ok(());
    }

    println!("Classificador de Sentimentos em Português");
    println!("Insira um texto para análise (Ctrl-D para sair).");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim();
        if text.is_empty() {
            println!("Por favor, insira um texto para realizar a análise.");
            continue;
        }

        print_result(engine.classify(text));
    }

    Ok(())
}

/// Map each outcome to its visual treatment.
fn print_result(prediction: Prediction) {
    match prediction {
        Prediction::Label(label) if label == POSITIVE => {
            println!("O sentimento é: {label} 🎉");
        }
        Prediction::Label(label) if label == NEGATIVE => {
            println!("O sentimento é: {label} 🙁");
        }
        Prediction::Label(label) => {
            println!("O sentimento é: {label}");
        }
        Prediction::ModelError => {
            println!("Erro no modelo. Verifique os logs para detalhes.");
        }
    }
}
