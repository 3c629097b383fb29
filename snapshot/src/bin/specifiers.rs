use emlog::Arg;
use emlog_snapshot::stdout_logger;

fn main() {
    let logger = stdout_logger();

    let cases: &[(&str, &[Arg])] = &[
        ("%%s   [%s]", &[Arg::Str("text")]),
        ("%%c   [%c]", &[Arg::Char('@')]),
        ("%%u   [%u]", &[Arg::Unsigned(u32::MAX)]),
        ("%%d   [%d]", &[Arg::Signed(i32::MIN)]),
        ("%%i   [%i]", &[Arg::Signed(-7)]),
        ("%%x   [%x]", &[Arg::Unsigned(0xdead_beef)]),
        ("%%X   [%X]", &[Arg::Signed(-1)]),
        ("%%f   [%f]", &[Arg::Float(1.995)]),
        ("%%.3f [%.3f]", &[Arg::Float(3.14159)]),
        ("%%.0f [%.0f]", &[Arg::Float(-2.5)]),
        ("%%.1f [%.1f]", &[Arg::Float(-0.04)]),
        ("%%.15f [%.15f]", &[Arg::Float(0.1)]),
        ("%%.99f [%.99f]", &[Arg::Float(0.25)]),
        ("%%f   [%f]", &[Arg::Float(f64::NAN)]),
        ("%%08x [%08x]", &[Arg::Unsigned(1)]),
        ("%%.2d [%.2d]", &[Arg::Signed(1)]),
        ("%%q   [%q]", &[]),
        ("%%u   [%u]", &[]),
        ("%%u   [%u]", &[Arg::Str("wrong kind")]),
        ("trailing [%", &[]),
    ];

    for (template, args) in cases {
        logger.print(template, args);
        emlog::print!(logger, "\r\n");
    }
}
