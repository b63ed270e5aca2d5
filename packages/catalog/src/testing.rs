//! Testing utilities: canned source pages and sample records.
//!
//! These are useful for testing applications that use the catalog library
//! without making real network calls. Pair the fixtures with
//! [`MockFetcher`](crate::fetchers::MockFetcher).

use crate::types::record::Record;

/// A record with every field populated.
pub fn sample_record(title: &str) -> Record {
    let slug = title.split_whitespace().collect::<Vec<_>>().join("-");
    let mut record = Record::new(title, format!("https://demonicscans.org/manga/{slug}"));
    record.cover_image_url = Some(format!("https://demonicscans.org/images/covers/{slug}.jpg"));
    record.authors = Some("Test Author".to_string());
    record.status = Some("Ongoing".to_string());
    record.genres = vec!["Action".to_string(), "Drama".to_string()];
    record.views = Some("1000".to_string());
    record.rating = Some(0.8);
    record.description = Some(format!("{title} is a test entry."));
    record.latest_chapter_label = Some("Chapter 10".to_string());
    record.latest_chapter_url = Some(format!(
        "https://demonicscans.org/title/{slug}/chapter/10/1"
    ));
    record
}

/// Canned pages shaped like the built-in sources' markup.
pub mod fixtures {
    pub const DEMONIC_BLUE_LOCK_URL: &str = "https://demonicscans.org/manga/Blue-Lock";

    pub const DEMONIC_BLUE_LOCK_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Blue Lock - Demonic Scans</title></head>
<body>
  <div id="manga-page">
    <div class="center-align">
      <img src="/images/covers/blue-lock.jpg" alt="Blue Lock">
    </div>
    <h1 class="big-fat-titles">Blue Lock</h1>
    <div id="manga-info-stats">
      <div class="flex flex-row"><li>Author</li><li>Muneyuki Kaneshiro</li></div>
      <div class="flex flex-row"><li>Status</li><li>Ongoing</li></div>
      <div class="flex flex-row"><li>Rating</li><li>87%</li></div>
      <div class="flex flex-row"><li>Last Update</li><li>2024-10-01</li></div>
    </div>
    <div class="genres-list">
      <li>Sports</li>
      <li>Drama</li>
      <li>Sports</li>
      <li>Shounen</li>
    </div>
    <div class="white-font">
      Japan's national team needs a striker.
      Three hundred forwards compete.
    </div>
    <div id="chapters-container">
      <a href="/title/Blue-Lock/chapter/280/1">
        Chapter 280
        <span>2024-10-01</span>
      </a>
      <a href="/title/Blue-Lock/chapter/279/1">
        Chapter 279
        <span>2024-09-24</span>
      </a>
    </div>
  </div>
</body>
</html>"#;

    /// What the site serves for an unknown slug.
    pub const DEMONIC_EMPTY_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Demonic Scans</title></head>
<body>
  <div class="container"><h2>Page not found</h2></div>
</body>
</html>"#;

    pub const MANGANATO_SEARCH_URL: &str = "https://manganato.com/search/story/solo_leveling";

    pub const MANGANATO_DETAIL_URL: &str = "https://chapmanganato.example.com/manga-dr980474";

    pub const MANGANATO_SEARCH_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
  <div class="panel-search-story">
    <div class="search-story-item">
      <a class="item-img" href="https://chapmanganato.example.com/manga-dr980474" title="Solo Leveling">
        <img src="https://avt.example.com/solo-leveling.jpg">
      </a>
    </div>
    <div class="search-story-item">
      <a class="item-img" href="https://chapmanganato.example.com/manga-ragnarok" title="Solo Leveling: Ragnarok"></a>
    </div>
  </div>
</body>
</html>"#;

    pub const MANGANATO_EMPTY_SEARCH_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
  <div class="panel-search-story"></div>
  <div class="panel-content-genres">Sorry, no results were found.</div>
</body>
</html>"#;

    pub const MANGANATO_DETAIL_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
  <div class="panel-story-info">
    <div class="story-info-left">
      <span class="info-image">
        <img class="img-loading" src="https://avt.example.com/solo-leveling.jpg" alt="Solo Leveling">
      </span>
    </div>
    <div class="story-info-right">
      <h1>Solo Leveling</h1>
      <table class="variations-tableInfo">
        <tr>
          <td class="table-label">Alternative :</td>
          <td class="table-value"><h2>Only I Level Up</h2></td>
        </tr>
        <tr>
          <td class="table-label">Author(s) :</td>
          <td class="table-value"><a href="/author/chugong">Chugong</a> - <a href="/author/dubu">Dubu</a></td>
        </tr>
        <tr>
          <td class="table-label">Status :</td>
          <td class="table-value">Completed</td>
        </tr>
        <tr>
          <td class="table-label">Genres :</td>
          <td class="table-value"><a>Action</a> - <a>Adventure</a> - <a>Fantasy</a></td>
        </tr>
      </table>
      <div class="story-info-right-extent">
        <p><span class="stre-label">Updated :</span><span class="stre-value">Dec 29,2023 - 14:05 PM</span></p>
        <p><span class="stre-label">View :</span><span class="stre-value">123,456,789</span></p>
        <p>
          <span class="stre-label">Rating :</span>
          <span class="stre-value">
            <em property="v:average">4.7</em> / <em property="v:best">5</em>
          </span>
        </p>
      </div>
    </div>
    <div class="panel-story-info-description">
      <h3>Description :</h3>
      Ten years ago, the Gate appeared.
    </div>
  </div>
  <div class="panel-story-chapter-list">
    <ul class="row-content-chapter">
      <li class="a-h">
        <a class="chapter-name" href="https://chapmanganato.example.com/manga-dr980474/chapter-200">Chapter 200</a>
        <span class="chapter-view">1.2M</span>
        <span class="chapter-time" title="Dec 29,2023 14:05">Dec 29,23</span>
      </li>
      <li class="a-h">
        <a class="chapter-name" href="https://chapmanganato.example.com/manga-dr980474/chapter-199">Chapter 199</a>
        <span class="chapter-time" title="Dec 22,2023 09:30">Dec 22,23</span>
      </li>
    </ul>
  </div>
</body>
</html>"#;
}
