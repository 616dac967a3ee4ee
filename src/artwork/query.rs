//! Query terms and the normalization rules shared by the providers.

use crate::playlist::model::Playcut;

/// Marker DJs type for a self-titled release.
const SELF_TITLED: &str = "s/t";

/// Spellings of a compilation credit in the log.
const VARIOUS_ARTISTS_ALIASES: [&str; 2] = ["v/a", "various artists"];

/// Canonical name the metadata services use for compilations.
pub const VARIOUS_ARTISTS: &str = "Various Artists";

/// iTunes thumbnail size token and the high-resolution replacement.
const ITUNES_THUMB: &str = "100x100bb";
const ITUNES_FULL: &str = "1200x1200";

/// Artist/release pair sent to the providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkQuery {
    pub artist: String,
    /// Release term, with the self-titled marker already expanded
    pub release: String,
}

impl ArtworkQuery {
    /// Build a query from a playcut, expanding "s/t" to the artist name.
    pub fn from_playcut(playcut: &Playcut) -> Self {
        Self::new(&playcut.artist_name, &playcut.release_title)
    }

    pub fn new(artist: &str, release: &str) -> Self {
        Self {
            artist: artist.to_string(),
            release: release_term(artist, release).to_string(),
        }
    }

    /// Free-text search string, "artist release".
    pub fn search_term(&self) -> String {
        format!("{} {}", self.artist, self.release)
    }
}

/// Release term for a lookup: a self-titled release is searched by artist name.
pub fn release_term<'a>(artist: &'a str, release: &'a str) -> &'a str {
    if release.eq_ignore_ascii_case(SELF_TITLED) {
        artist
    } else {
        release
    }
}

/// Map compilation aliases to the canonical "Various Artists".
pub fn canonical_artist(artist: &str) -> &str {
    if VARIOUS_ARTISTS_ALIASES
        .iter()
        .any(|alias| artist.eq_ignore_ascii_case(alias))
    {
        VARIOUS_ARTISTS
    } else {
        artist
    }
}

/// Discogs serves animated placeholders as GIFs; those never count as artwork.
pub fn is_gif(url: &str) -> bool {
    url.ends_with(".gif")
}

/// Rewrite an iTunes 100px thumbnail URL to its 1200px variant.
pub fn itunes_high_res(url: &str) -> String {
    url.replace(ITUNES_THUMB, ITUNES_FULL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_titled_uses_artist() {
        let query = ArtworkQuery::new("Television", "S/T");
        assert_eq!(query.release, "Television");
        assert_eq!(ArtworkQuery::new("Wire", "s/t").release, "Wire");
    }

    #[test]
    fn test_regular_release_kept() {
        let query = ArtworkQuery::new("Wire", "Pink Flag");
        assert_eq!(query.release, "Pink Flag");
        assert_eq!(query.search_term(), "Wire Pink Flag");
    }

    #[test]
    fn test_various_artists_aliases() {
        assert_eq!(canonical_artist("V/A"), VARIOUS_ARTISTS);
        assert_eq!(canonical_artist("v/a"), VARIOUS_ARTISTS);
        assert_eq!(canonical_artist("VARIOUS ARTISTS"), VARIOUS_ARTISTS);
        assert_eq!(canonical_artist("Various"), "Various");
    }

    #[test]
    fn test_gif_detection() {
        assert!(is_gif("https://img.discogs.com/spacer.gif"));
        assert!(!is_gif("https://img.discogs.com/cover.jpg"));
    }

    #[test]
    fn test_itunes_high_res() {
        assert_eq!(
            itunes_high_res("https://is1.mzstatic.com/a/100x100bb.jpg"),
            "https://is1.mzstatic.com/a/1200x1200.jpg"
        );
        assert_eq!(itunes_high_res("https://x/other.jpg"), "https://x/other.jpg");
    }
}
