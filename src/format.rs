//! Rendering of completed fixes into the text record layout.

use err::FormatError;
use parser::CompletedFix;

/// First line of every rendered record.
pub const RULE: &str = "-------------------------------------------------------------------";

/// Split a `ddmmyy` date into its day, month and year parts.
/// Nothing beyond the first six characters is looked at.
fn date_parts(date: &str) -> Result<(&str, &str, &str), FormatError> {
    match (date.get(0..2), date.get(2..4), date.get(4..6)) {
        (Some(dd), Some(mm), Some(yy)) => Ok((dd, mm, yy)),
        _ => Err(FormatError::ShortDate(date.to_owned())),
    }
}

/// Render `fix` as a six line record, each line terminated by `\n`.
pub fn render(fix: &CompletedFix) -> Result<String, FormatError> {
    let (dd, mm, yy) = date_parts(&fix.date)?;
    Ok(format!(
        "{rule}\n\
         {time} czas\n\
         {lat} {lat_dir} szerokosc\n\
         {long} {long_dir} dlugosc\n\
         {dd}.{mm}.{yy} data\n\
         {speed} predkosc\n\
         {az0}, {az1}, {az2} azymuty\n",
        rule = RULE,
        time = fix.time,
        lat = fix.lat,
        lat_dir = fix.lat_dir,
        long = fix.long,
        long_dir = fix.long_dir,
        dd = dd,
        mm = mm,
        yy = yy,
        speed = fix.speed,
        az0 = fix.azimuths[0],
        az1 = fix.azimuths[1],
        az2 = fix.azimuths[2],
    ))
}
