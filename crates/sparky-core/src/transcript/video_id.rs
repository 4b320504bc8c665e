//! YouTube watch-URL parsing.

use sparky_types::transcript::VideoId;
use url::Url;

/// Extract the canonical video identifier from a YouTube URL.
///
/// Two shapes are recognized: the short form (`https://youtu.be/<id>`,
/// where the id is the first path segment) and the canonical watch form
/// (`https://www.youtube.com/watch?v=<id>`, with or without `www.`, the
/// `v` parameter anywhere in the query). Anything else -- other hosts,
/// unparseable input, a missing or empty id -- yields `None`.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    let parsed = Url::parse(url).ok()?;
    match parsed.host_str()? {
        "youtu.be" => parsed
            .path_segments()
            .and_then(|mut segments| segments.next())
            .filter(|id| !id.is_empty())
            .map(VideoId::from),
        "www.youtube.com" | "youtube.com" => parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .filter(|id| !id.is_empty())
            .map(VideoId::from),
        _ => None,
    }
}
