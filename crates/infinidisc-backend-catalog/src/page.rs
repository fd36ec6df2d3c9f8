//! Page assembly.

use infinidisc_core::{CatalogRecord, PageRequest};
use rayon::prelude::*;

use crate::assemble::assemble_record_with;
use crate::error::CatalogResult;
use crate::lexicon::{Lexicon, WordListLexicon};

/// Assembles every record of a page using the built-in word lists.
pub fn assemble_page(request: &PageRequest) -> CatalogResult<Vec<CatalogRecord>> {
    assemble_page_with(request, || WordListLexicon::new(request.locale))
}

/// Assembles every record of a page, creating one lexicon per record.
///
/// Records are assembled in parallel and returned in index order. If any
/// record fails, the whole page fails with one of the record errors.
pub fn assemble_page_with<L, F>(
    request: &PageRequest,
    new_lexicon: F,
) -> CatalogResult<Vec<CatalogRecord>>
where
    L: Lexicon,
    F: Fn() -> L + Sync,
{
    let range = request.index_range()?;
    let start = range.start;

    (0..request.page_size)
        .into_par_iter()
        .map(|offset| {
            let mut lexicon = new_lexicon();
            assemble_record_with(
                &mut lexicon,
                &request.user_seed,
                start + offset as u64,
                request.locale,
                request.average_likes,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::assemble_record;
    use infinidisc_core::Locale;
    use pretty_assertions::assert_eq;

    fn request(page: u64, page_size: u32) -> PageRequest {
        PageRequest {
            user_seed: "abc".to_string(),
            page,
            page_size,
            locale: Locale::EnUs,
            average_likes: 5.0,
        }
    }

    #[test]
    fn test_page_is_in_index_order() {
        let records = assemble_page(&request(2, 10)).unwrap();
        let indices: Vec<u64> = records.iter().map(|r| r.index).collect();
        assert_eq!(indices, (20..30).collect::<Vec<u64>>());
    }

    #[test]
    fn test_page_matches_single_record_assembly() {
        let records = assemble_page(&request(1, 5)).unwrap();
        for record in records {
            let single = assemble_record("abc", record.index, Locale::EnUs, 5.0).unwrap();
            assert_eq!(record, single);
        }
    }

    #[test]
    fn test_pages_are_independent_of_page_size() {
        // Index 12 lives on page 1 of size 10 and page 3 of size 4.
        let a = assemble_page(&request(1, 10)).unwrap();
        let b = assemble_page(&request(3, 4)).unwrap();
        assert_eq!(a[2], b[0]);
    }

    #[test]
    fn test_overflowing_page_is_rejected() {
        let err = assemble_page(&request(u64::MAX, 20)).unwrap_err();
        assert!(matches!(err, crate::CatalogError::Validation(_)));
    }
}
