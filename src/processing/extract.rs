//! Review extraction: joins reviews against a set of business ids.
use std::path::Path;

use log::info;

use crate::error::Error;
use crate::escape::escape;
use crate::io::{JsonlReader, LineWriter, OnMalformed};
use crate::records::Review;

use super::IdSet;

/// Write the escaped text of every review of a business in `ids`, one review per line.
///
/// `dst` is truncated first. Returns the number of written reviews.
/// On error, lines written before the failure are kept.
pub fn write_review_file(dst: &Path, src: &Path, ids: &IdSet) -> Result<usize, Error> {
    write_review_file_with(dst, src, ids, OnMalformed::Abort)
}

/// [write_review_file] with an explicit policy for malformed lines.
pub fn write_review_file_with(
    dst: &Path,
    src: &Path,
    ids: &IdSet,
    policy: OnMalformed,
) -> Result<usize, Error> {
    info!("extracting reviews from {:?} into {:?}", src, dst);
    let mut writer = LineWriter::create(dst)?;

    for review in JsonlReader::<Review>::from_path(src, policy)? {
        let review = review?;
        if !ids.contains(&review.business_id) {
            continue;
        }
        writer.write_line(&escape(&review.text))?;
    }

    let count = writer.finish()?;
    info!("extracted {} reviews", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REVIEWS: &str = r#"{"business_id":"b1","text":"Great food!\nWould return."}
{"business_id":"b2","text":"Bad store."}
{"business_id":"b1","text":"Second one."}
"#;

    #[test]
    fn join() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("review.json");
        let dst = dir.path().join("review.txt");
        std::fs::write(&src, REVIEWS).unwrap();

        let count = write_review_file(&dst, &src, &IdSet::from_iter(["b1"])).unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            std::fs::read_to_string(&dst).unwrap(),
            "Great food!\\nWould return.\nSecond one.\n"
        );
    }

    #[test]
    fn empty_ids() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("review.json");
        let dst = dir.path().join("review.txt");
        std::fs::write(&src, REVIEWS).unwrap();

        assert_eq!(write_review_file(&dst, &src, &IdSet::default()).unwrap(), 0);
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "");
    }

    #[test]
    fn partial_output_kept_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("review.json");
        let dst = dir.path().join("review.txt");
        std::fs::write(
            &src,
            "{\"business_id\":\"b1\",\"text\":\"kept\"}\n{\"business_id\":\"b1\",\"stars\":3}\n",
        )
        .unwrap();

        let res = write_review_file(&dst, &src, &IdSet::from_iter(["b1"]));
        assert!(matches!(res, Err(Error::Parse { line: 2, .. })));
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "kept\n");
    }
}
