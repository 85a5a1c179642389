//! bintext - BINARY / LEET TEXT CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use bintext::{
    cli::{Args, WriteMode},
    controller::ModeController,
    export::{download_path, save_output},
    mode::Mode,
    settings::{Settings, Theme},
    stats::format_bytes,
};

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    init_tracing(args.verbose);

    // 설정 불러오기
    let settings_path = args.settings_path();
    let mut settings = Settings::load_or_default(&settings_path);

    // 테마 변경
    if args.changes_theme() {
        update_theme(&args, &mut settings, &settings_path)?;

        if args.text.is_none() && args.input.is_none() && !args.interactive && io::stdin().is_terminal()
        {
            return Ok(ExitCode::SUCCESS);
        }
    }

    if args.interactive {
        run_interactive(&args, &mut settings, &settings_path)?;
        return Ok(ExitCode::SUCCESS);
    }

    let input = read_input(&args)?;

    let mut controller = ModeController::with_mode(args.mode);
    controller.set_input(input);

    if args.json {
        let json = serde_json::to_string_pretty(&controller.view())
            .context("JSON 리포트 직렬화 실패")?;
        println!("{}", json);
    } else {
        let theme = settings.theme;
        print_header(&args, theme);
        print_result(&controller, theme);

        if !args.no_stats {
            controller.stats().print_summary(controller.mode(), theme);
        }

        if args.steps {
            controller.steps().print(theme);
        }
    }

    if controller.error().is_some() {
        return Ok(ExitCode::FAILURE);
    }

    if let Some(path) = args.output_path() {
        save_result(&controller, &path, args.write_mode)?;
    }

    Ok(ExitCode::SUCCESS)
}

/// 진단 로그 초기화
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if level != LevelFilter::OFF {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }
}

/// 테마 변경 후 저장
fn update_theme(args: &Args, settings: &mut Settings, path: &Path) -> Result<()> {
    let theme = match args.theme {
        Some(theme) => {
            settings.theme = theme;
            theme
        }
        None => settings.toggle_theme(),
    };

    settings.save(path)?;
    print_notification(&format!("Switched to {} mode", theme), theme);
    Ok(())
}

/// 입력 읽기 (인자 → 파일 → 표준 입력 순)
fn read_input(args: &Args) -> Result<String> {
    if let Some(ref text) = args.text {
        return Ok(text.clone());
    }

    if let Some(ref path) = args.input {
        let content = fs::read_to_string(path)
            .with_context(|| format!("입력 파일을 읽을 수 없습니다: {:?}", path))?;
        return Ok(strip_line_ending(content));
    }

    if io::stdin().is_terminal() {
        anyhow::bail!("변환할 입력이 없습니다. 텍스트, --input 또는 표준 입력을 사용하세요.");
    }

    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("표준 입력을 읽을 수 없습니다")?;
    Ok(strip_line_ending(content))
}

/// 파일/파이프 입력 끝의 줄바꿈 하나 제거
fn strip_line_ending(mut content: String) -> String {
    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }
    content
}

/// 헤더 출력
fn print_header(args: &Args, theme: Theme) {
    println!("\n{}", theme.rule());
    println!(
        "{}",
        " 🔢 BINTEXT CONVERTER".bright_white().bold()
    );
    println!("{}", theme.rule());
    println!("  {} 모드: {}", "⚙️".bright_yellow(), theme.accent(&args.mode.to_string()));

    if let Some(ref path) = args.input {
        println!("  {} 입력 파일: {:?}", "📂".bright_cyan(), path);
    }

    if let Some(path) = args.output_path() {
        println!("  {} 출력 파일: {:?}", "📄".bright_green(), path);
        println!("  {} 저장 모드: {}", "⚙️".bright_yellow(), args.write_mode);
    }

    println!("  {} 테마: {}", theme.icon(), theme);
    println!("{}", theme.rule());
}

/// 변환 결과 또는 에러 출력
fn print_result(controller: &ModeController, theme: Theme) {
    if let Some(error) = controller.error() {
        println!("\n{} {}", "❌".bright_red(), error.to_string().red());
        return;
    }

    if controller.output().is_empty() {
        println!("\n  {}", controller.output_placeholder().dimmed());
        return;
    }

    println!("\n{}", " 📤 결과".bright_white().bold());
    if controller.is_leet() {
        println!("  {}", theme.accent(controller.output()));
    } else {
        println!("  {}", controller.output());
    }
}

/// 알림 출력
fn print_notification(message: &str, theme: Theme) {
    println!("{} {}", theme.icon(), message.bright_green());
}

/// 결과 파일 저장
fn save_result(controller: &ModeController, path: &Path, mode: WriteMode) -> Result<()> {
    let written = save_output(controller.output(), path, mode)?;
    println!(
        "\n{} 저장 완료: {:?} ({})\n",
        "✅".bright_green(),
        path,
        format_bytes(written)
    );
    Ok(())
}

/// 대화형 모드 명령
#[derive(Debug, PartialEq)]
enum Command {
    /// 입력 변경
    Input(String),
    /// 모드 전환
    Mode(Mode),
    /// 알 수 없는 모드 이름
    UnknownMode(String),
    Clear,
    Steps,
    Stats,
    /// 결과 저장 (경로 없으면 저장 파일 이름 사용)
    Save(Option<PathBuf>),
    Theme,
    Help,
    Quit,
    /// 알 수 없는 명령
    Unknown(String),
}

/// 한 줄 입력을 명령으로 해석
///
/// `:`로 시작하지 않는 줄은 입력입니다. `::`로 시작하면 `:` 하나를 뺀 입력입니다.
fn parse_command(line: &str) -> Command {
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Input(line.to_string());
    };

    if rest.starts_with(':') {
        return Command::Input(rest.to_string());
    }

    let mut parts = rest.trim().splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default();
    let argument = parts.next().map(str::trim).filter(|s| !s.is_empty());

    match name {
        "mode" | "m" => match argument.and_then(Mode::from_name) {
            Some(mode) => Command::Mode(mode),
            None => Command::UnknownMode(argument.unwrap_or_default().to_string()),
        },
        "clear" | "c" => Command::Clear,
        "steps" => Command::Steps,
        "stats" => Command::Stats,
        "save" | "s" => Command::Save(argument.map(PathBuf::from)),
        "theme" => Command::Theme,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// 대화형 모드 실행
fn run_interactive(args: &Args, settings: &mut Settings, settings_path: &Path) -> Result<()> {
    let mut controller = ModeController::with_mode(args.mode);

    print_header(args, settings.theme);
    print_help();
    println!("\n  {}", controller.input_placeholder().dimmed());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", format!("[{}]>", controller.mode()).bright_cyan());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("표준 입력을 읽을 수 없습니다")?;
        let theme = settings.theme;

        match parse_command(&line) {
            Command::Input(input) => {
                controller.set_input(input);
                print_result(&controller, theme);
            }
            Command::Mode(mode) => {
                controller.set_mode(mode);
                println!("  {}", controller.input_placeholder().dimmed());
                if !controller.input().trim().is_empty() {
                    print_result(&controller, theme);
                }
            }
            Command::UnknownMode(name) => {
                println!(
                    "{} 알 수 없는 모드: '{}' (binary, text, leet 중 선택)",
                    "⚠️".bright_yellow(),
                    name
                );
            }
            Command::Clear => {
                controller.clear();
                print_notification("Fields cleared!", theme);
            }
            Command::Steps => controller.steps().print(theme),
            Command::Stats => controller.stats().print_summary(controller.mode(), theme),
            Command::Save(path) => {
                let path = path.unwrap_or_else(|| download_path(Path::new("."), controller.mode()));
                if let Err(e) = save_result(&controller, &path, args.write_mode) {
                    println!("{} {}", "❌".bright_red(), e.to_string().red());
                }
            }
            Command::Theme => {
                let theme = settings.toggle_theme();
                if let Err(e) = settings.save(settings_path) {
                    tracing::warn!("Could not save theme preference: {}", e);
                }
                print_notification(&format!("Switched to {} mode", theme), theme);
            }
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Unknown(name) => {
                println!("{} 알 수 없는 명령: ':{}' (:help 참고)", "⚠️".bright_yellow(), name);
            }
        }
    }

    Ok(())
}

/// 대화형 모드 도움말 출력
fn print_help() {
    println!("\n{}", " 💬 대화형 모드".bright_white().bold());
    println!("  한 줄을 입력하면 현재 모드로 바로 변환합니다.");
    println!("  {}  모드 전환 (binary / text / leet)", ":mode <이름>".bright_cyan());
    println!("  {}         입력/출력 지우기", ":clear".bright_cyan());
    println!("  {}         변환 단계 보기", ":steps".bright_cyan());
    println!("  {}         통계 보기", ":stats".bright_cyan());
    println!("  {}  결과 저장", ":save [파일]".bright_cyan());
    println!("  {}         테마 전환", ":theme".bright_cyan());
    println!("  {}          종료", ":quit".bright_cyan());
    println!("  {}", "':'로 시작하는 텍스트는 '::'로 입력하세요.".dimmed());
}
