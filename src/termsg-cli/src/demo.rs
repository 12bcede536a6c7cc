//! Guided tour of the formatter: prefixes, kinds, colours and wrapping.

use anyhow::Result;
use termsg_core::MessageFormatter;

const DEMO_COLORS: [&str; 16] = [
    "BLACK",
    "RED",
    "GREEN",
    "YELLOW",
    "BLUE",
    "MAGENTA",
    "CYAN",
    "WHITE",
    "LIGHTBLACK_EX",
    "LIGHTRED_EX",
    "LIGHTGREEN_EX",
    "LIGHTYELLOW_EX",
    "LIGHTBLUE_EX",
    "LIGHTMAGENTA_EX",
    "LIGHTCYAN_EX",
    "LIGHTWHITE_EX",
];

const DEMO_WEIGHTS: [&str; 3] = ["NORMAL", "BRIGHT", "DIM"];

pub fn run(m: &mut MessageFormatter) -> Result<()> {
    message_kinds(m)?;
    color_table(m)?;
    wrapping(m)?;
    Ok(())
}

fn message_kinds(m: &mut MessageFormatter) -> Result<()> {
    m.prefix_reset("demo");
    m.info(&["Hello World (to stdout)"])?;
    m.msg(&["This is msg(), with the prefix \"demo\" (to stdout)"])?;
    m.info(&["This is info() (to stdout)"])?;
    m.warn(&["This is warn() (to stderr)"])?;
    m.error(&["This is error() (to stderr)"])?;
    m.line(None, '-')?;
    m.warn(&[
        "This is a multi-line warn() message.",
        "This is the next line.",
        "(to stderr)",
    ])?;

    m.prefix_push("color");
    let nested = format!("Nested prefixes {:?}, from info() (to stdout)", m.prefixes());
    m.info(&[nested])?;
    let nested = format!("msg() with prefixes {:?}", m.prefixes());
    m.msg(&[nested])?;
    m.line(None, '-')?;

    m.msg(&["New default colours for info() and warn()"])?;
    m.set_colors([
        ("info_fore", "LIGHTBLUE_EX"),
        ("info_style", "BRIGHT"),
        ("warn_fore", "RED"),
        ("warn_back", "WHITE"),
        ("warn_style", "BRIGHT"),
    ])?;
    m.info(&["This is info()", "with new default colours."])?;
    m.warn(&["This is warn()", "with new default colours."])?;
    m.prefix_reset("");
    m.line(None, '-')?;
    m.msg(&["", "Back to msg() without prefixes.", ""])?;
    Ok(())
}

fn color_table(m: &mut MessageFormatter) -> Result<()> {
    m.prefix_reset("colors");
    m.msg(&["Every foreground colour for info() on a black background."])?;
    for color in DEMO_COLORS.into_iter().filter(|color| *color != "BLACK") {
        m.prefix_push(color);
        m.set_colors([("info_fore", color), ("info_back", "BLACK")])?;
        m.line(Some(52), '-')?;
        for weight in DEMO_WEIGHTS {
            m.prefix_push(weight);
            m.set_colors([("info_style", weight)])?;
            m.info(&["Hello World."])?;
            m.prefix_pop();
        }
        m.prefix_pop();
    }
    m.line(None, '-')?;
    Ok(())
}

fn wrapping(m: &mut MessageFormatter) -> Result<()> {
    let previous_separator = m.prefix_separator().to_string();
    let previous_columns = m.columns();

    m.set_columns(60)?;
    m.set_prefix_separator("> ");
    m.prefix_reset("textwrap");

    let label = format!("default {} cols", m.columns());
    m.prefix_push(&label);
    m.warn(&[
        "This is a very, very, very long line that needs to be wrapped. Or else it will look like crap.",
        "",
    ])?;
    m.prefix_pop();

    m.prefix_push("disabled");
    let was_wrapping = m.wrap_enabled();
    m.enable_wrap(Some(false));
    m.line(None, '-')?;
    m.warn(&[
        "This is a very, very, very long line that doesn't want to be wrapped. Even if it will look like crap.",
    ])?;
    m.prefix_pop();

    m.enable_wrap(Some(was_wrapping));
    m.set_prefix_separator(previous_separator);
    m.set_columns(previous_columns as i64)?;
    Ok(())
}
