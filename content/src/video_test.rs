use super::*;
use crate::find_by_id;

#[test]
fn offset_param_replaces_first_colon_only() {
    let ts = VideoTimestamp { time: "2:30", label: "Ulam Spiral" };
    assert_eq!(ts.offset_param(), "2m30s");
    let long = VideoTimestamp { time: "1:02:03", label: "Long" };
    assert_eq!(long.offset_param(), "1m02:03s");
}

#[test]
fn watch_url_points_at_timestamp() {
    let video = find_by_id(VIDEOS, "veritasium-prime-numbers").unwrap();
    let url = video.watch_url_at(&video.timestamps[1]);
    assert_eq!(url, "https://youtube.com/watch?v=Y-sEH0RsHFQ&t=8m15s");
}

#[test]
fn embed_url_autoplays() {
    let video = find_by_id(VIDEOS, "coding-train-perlin").unwrap();
    assert_eq!(video.embed_url(), "https://www.youtube.com/embed/Qf4dIN99e2w?autoplay=1");
}
