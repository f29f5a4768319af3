#[cfg(feature = "fern")]
pub fn init_logger(
    min_level: log::LevelFilter, debug_file_name: Option<&std::ffi::OsStr>,
) -> Result<(), fern::InitError> {
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            // UTC rather than local time, since local-offset lookups are not
            // reliable in multi-threaded processes.
            let now = time::OffsetDateTime::now_utc();

            out.finish(format_args!(
                "{}[{}][{}] {}",
                now.format(&time::macros::format_description!(
                    // "[[[" escapes a literal "[".
                    // See https://time-rs.github.io/book/api/format-description.html
                    "[[[year]-[month]-[day]][[[hour]:[minute]:[second]]"
                ))
                .unwrap(),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(min_level);

    match debug_file_name {
        Some(file_name) => dispatch.chain(fern::log_file(file_name)?).apply()?,
        None => dispatch.chain(std::io::stderr()).apply()?,
    }

    Ok(())
}
