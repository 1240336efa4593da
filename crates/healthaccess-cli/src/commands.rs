use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use healthaccess_assessments::error::ValidationError;
use healthaccess_assessments::result::AssessmentResult;
use healthaccess_assessments::session::{AssessmentSession, CompletedAssessment};
use healthaccess_assessments::{all_questionnaires, get_questionnaire};
use healthaccess_core::models::answer::AnswerSet;
use healthaccess_core::models::record::SavedAssessment;
use healthaccess_core::storage_keys;
use healthaccess_export::render::{render_record, render_result, RenderFormat};
use healthaccess_storage::results::ResultsLog;

use crate::cli::{Command, OutputFormat};
use crate::config::{self, PortalConfig};
use crate::input::{self, Reply};

/// Everything a command needs: the loaded config and the resolved data dir.
pub struct AppContext {
    pub config: PortalConfig,
    pub data_dir: PathBuf,
    pub config_dir: PathBuf,
}

impl AppContext {
    pub fn results_log(&self) -> ResultsLog {
        ResultsLog::open(&self.data_dir).with_max_entries(self.config.max_saved_results)
    }

    fn format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.unwrap_or(self.config.default_format)
    }
}

pub async fn run(command: Command, ctx: &mut AppContext) -> eyre::Result<()> {
    match command {
        Command::List => print!("{}", list_questionnaires()),
        Command::Show { id } => print!("{}", show_questionnaire(&id)?),
        Command::Take { id, save, format } => {
            let format = ctx.format(format);
            take(ctx, &id, save, format).await?;
        }
        Command::Score {
            id,
            answers,
            save,
            format,
        } => {
            let format = ctx.format(format);
            let answers = input::read_answers_file(&answers)?;
            let completed = score_answer_set(&id, &answers)?;
            finish(ctx, &completed, save, format).await?;
        }
        Command::History { id, format } => {
            let format = ctx.format(format);
            let log = ctx.results_log();
            match id {
                Some(id) => println!("{}", render_saved(&log.get(id).await?, format)?),
                None => print!("{}", history(&log.list().await?, format)?),
            }
        }
        Command::Export { file } => {
            let dest = file.unwrap_or_else(|| {
                PathBuf::from(storage_keys::export_file(jiff::Zoned::now().date()))
            });
            let count = ctx.results_log().export(&dest).await?;
            println!("Exported {count} assessment(s) to {}", dest.display());
        }
        Command::Clear => {
            if ctx.results_log().clear().await? {
                println!("Saved results deleted.");
            } else {
                println!("No saved results.");
            }
        }
        Command::Config {
            max_saved_results,
            default_format,
        } => {
            if max_saved_results.is_none() && default_format.is_none() {
                println!("{}", serde_json::to_string_pretty(&ctx.config)?);
                println!("data dir: {}", ctx.data_dir.display());
            } else {
                let dropped = configure(ctx, max_saved_results, default_format).await?;
                println!("Settings saved.");
                if dropped > 0 {
                    println!("Removed {dropped} older result(s).");
                }
            }
        }
    }
    Ok(())
}

pub fn list_questionnaires() -> String {
    let mut out = String::new();
    for q in all_questionnaires() {
        let _ = writeln!(out, "{:<16} {}", q.id(), q.title());
        let _ = writeln!(out, "{:<16} {}", "", q.description());
    }
    out
}

pub fn show_questionnaire(id: &str) -> eyre::Result<String> {
    let questionnaire = get_questionnaire(id)
        .ok_or_else(|| ValidationError::UnknownQuestionnaire { id: id.to_string() })?;
    let mut out = String::new();
    writeln!(out, "{}", questionnaire.title())?;
    writeln!(out, "{}", questionnaire.description())?;
    for (i, question) in questionnaire.questions().iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "{}. {} [{}]", i + 1, question.text, question.id)?;
        for (n, option) in question.options.iter().enumerate() {
            writeln!(out, "   {}) {} = {}", n + 1, option.label, option.value)?;
        }
    }
    Ok(out)
}

/// Score answers read from a file. An unanswered slot is reported the same
/// way the interactive session reports it.
pub fn score_answer_set(id: &str, answers: &AnswerSet) -> eyre::Result<CompletedAssessment> {
    let questionnaire = get_questionnaire(id)
        .ok_or_else(|| ValidationError::UnknownQuestionnaire { id: id.to_string() })?;
    let values = questionnaire
        .validate_answers(answers)
        .map_err(submission_error)?;
    let result = questionnaire.score_answers(&values)?;
    Ok(CompletedAssessment {
        questionnaire_id: questionnaire.id().to_string(),
        title: questionnaire.title().to_string(),
        answers: values,
        result,
    })
}

fn submission_error(err: ValidationError) -> eyre::Report {
    match err {
        ValidationError::Unanswered { .. } => {
            eyre::eyre!("Please answer all questions before submitting. ({err})")
        }
        other => other.into(),
    }
}

async fn take(ctx: &AppContext, id: &str, save: bool, format: OutputFormat) -> eyre::Result<()> {
    let mut session = AssessmentSession::start(id)?;

    if let Some(last) = ctx.results_log().latest_for(id).await? {
        let result: AssessmentResult = serde_json::from_value(last.result)?;
        println!(
            "Last taken {}: {}",
            last.completed_at.strftime("%Y-%m-%d"),
            result.headline()
        );
    }
    println!("{}", session.questionnaire().title());
    println!("{}", session.questionnaire().description());

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();
    match run_session(&mut session, &mut input, &mut out)? {
        Some(completed) => finish(ctx, &completed, save, format).await,
        None => {
            println!("Assessment abandoned.");
            Ok(())
        }
    }
}

/// Drive a session from line input until it is submitted (`Some`) or the
/// user quits or input ends (`None`).
pub fn run_session<R: BufRead, W: Write>(
    session: &mut AssessmentSession,
    input: &mut R,
    out: &mut W,
) -> eyre::Result<Option<CompletedAssessment>> {
    loop {
        print_question(session, out)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let submitted = match input::parse_reply(session.current_question(), &line) {
            Reply::Quit => return Ok(None),
            Reply::Back => {
                if !session.back() {
                    writeln!(out, "Already at the first question.")?;
                }
                None
            }
            Reply::Continue => {
                if session.current_answer().is_none() {
                    writeln!(out, "Please answer the question before continuing.")?;
                    None
                } else {
                    step_forward(session, out)?
                }
            }
            Reply::Answer(value) => match session.answer(value) {
                Ok(()) => step_forward(session, out)?,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    None
                }
            },
        };
        if submitted.is_some() {
            return Ok(submitted);
        }
    }
}

fn step_forward<W: Write>(
    session: &mut AssessmentSession,
    out: &mut W,
) -> eyre::Result<Option<CompletedAssessment>> {
    if !session.is_last() {
        session.advance()?;
        return Ok(None);
    }
    match session.submit() {
        Ok(completed) => Ok(Some(completed)),
        Err(ValidationError::Unanswered { index, .. }) => {
            writeln!(out, "Please answer all questions before submitting.")?;
            session.go_to(index)?;
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

fn print_question<W: Write>(session: &AssessmentSession, out: &mut W) -> eyre::Result<()> {
    let progress = session.progress();
    let question = session.current_question();
    let current = session.current_answer();

    writeln!(out)?;
    writeln!(
        out,
        "Question {} of {} ({}%)",
        progress.position, progress.total, progress.percent
    )?;
    writeln!(out, "{}", question.text)?;
    for (n, option) in question.options.iter().enumerate() {
        let marker = if current == Some(&option.value) { "*" } else { " " };
        writeln!(out, " {marker}{}) {}", n + 1, option.label)?;
    }
    write!(out, "Answer [1-{}, b = back, q = quit]: ", question.options.len())?;
    out.flush()?;
    Ok(())
}

async fn finish(
    ctx: &AppContext,
    completed: &CompletedAssessment,
    save: bool,
    format: OutputFormat,
) -> eyre::Result<()> {
    let completed_at = jiff::Timestamp::now();
    println!(
        "{}",
        render_output(&completed.title, completed_at, &completed.result, format)?
    );
    if save {
        let record = completed.to_record(completed_at)?;
        let id = record.id;
        ctx.results_log().append(record).await?;
        println!("Saved as {id}.");
    }
    Ok(())
}

pub fn render_output(
    title: &str,
    completed_at: jiff::Timestamp,
    result: &AssessmentResult,
    format: OutputFormat,
) -> eyre::Result<String> {
    Ok(match format {
        OutputFormat::Text => render_result(title, completed_at, result, RenderFormat::Text)?,
        OutputFormat::Html => render_result(title, completed_at, result, RenderFormat::Html)?,
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
    })
}

fn render_saved(record: &SavedAssessment, format: OutputFormat) -> eyre::Result<String> {
    Ok(match format {
        OutputFormat::Text => render_record(record, RenderFormat::Text)?,
        OutputFormat::Html => render_record(record, RenderFormat::Html)?,
        OutputFormat::Json => serde_json::to_string_pretty(record)?,
    })
}

/// Saved results, most recent first. Text is one summary line per record.
pub fn history(records: &[SavedAssessment], format: OutputFormat) -> eyre::Result<String> {
    if records.is_empty() && format != OutputFormat::Json {
        return Ok("No saved assessments.\n".to_string());
    }
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)? + "\n"),
        OutputFormat::Html => {
            let mut out = String::new();
            for record in records {
                out.push_str(&render_record(record, RenderFormat::Html)?);
            }
            Ok(out)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for record in records {
                let result: AssessmentResult = serde_json::from_value(record.result.clone())?;
                writeln!(
                    out,
                    "{}  {}  {:<26} {}",
                    record.id,
                    record.completed_at.strftime("%Y-%m-%d %H:%M"),
                    record.title,
                    result.headline()
                )?;
            }
            Ok(out)
        }
    }
}

/// Update and save settings. Lowering the cap prunes the log right away;
/// returns how many records that dropped.
pub async fn configure(
    ctx: &mut AppContext,
    max_saved_results: Option<usize>,
    default_format: Option<OutputFormat>,
) -> eyre::Result<usize> {
    if let Some(max) = max_saved_results {
        ctx.config.max_saved_results = max.max(1);
    }
    if let Some(format) = default_format {
        ctx.config.default_format = format;
    }
    config::save_config_to(&ctx.config_dir, &ctx.config)?;

    if max_saved_results.is_some() {
        return Ok(ctx.results_log().prune().await?);
    }
    Ok(0)
}
