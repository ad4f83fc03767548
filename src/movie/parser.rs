use anyhow::{bail, Context};
use itertools::Itertools;
use log::warn;
use scraper::{ElementRef, Html};

use crate::text::collapsed_text;

use super::schema::MovieRecord;

pub fn extract(html: &Html) -> Vec<MovieRecord> {
    let Some(grid) = html.select(selector!(".grid-view")).next() else {
        return vec![];
    };
    grid.select(selector!("div.item"))
        .filter_map(|item| match parse_item(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping a malformed movie item: {e:#}");
                None
            }
        })
        .collect()
}

fn parse_item(item: ElementRef) -> anyhow::Result<MovieRecord> {
    let info = item.select(selector!(".info > ul > li")).collect_vec();
    let [title_block, summary_block, marker_block, ..] = info[..] else {
        bail!("Expected at least three info sub-blocks, found {}", info.len());
    };

    let title_link = title_block
        .select(selector!("a"))
        .next()
        .context("Title link not found")?;
    let link = title_link
        .value()
        .attr("href")
        .context("Title link has no href")?
        .to_owned();
    let title = collapsed_text(title_link);

    let mut updation = None;
    let mut rating = None;
    for span in marker_block.select(selector!("span")) {
        // The first class token discriminates the span; a rating span encodes
        // its value in the class name itself, not in the text.
        let Some(class) = span
            .value()
            .attr("class")
            .and_then(|classes| classes.split_whitespace().next())
        else {
            continue;
        };
        if class == "date" {
            updation = Some(collapsed_text(span));
        } else if class.starts_with("rating") {
            rating = regex!(r"\d+").find(class).map(|m| m.as_str().to_owned());
        }
    }

    // An absent tags block yields a single empty string, as the upstream
    // output always did.
    let labels = item
        .select(selector!(".tags"))
        .next()
        .map(collapsed_text)
        .unwrap_or_default()
        .replace("标签: ", "")
        .split(' ')
        .map(str::to_owned)
        .collect_vec();

    let cover = item
        .select(selector!(".pic > .nbg > img"))
        .next()
        .context("Cover image not found")?
        .value()
        .attr("src")
        .context("Cover image has no src")?
        .to_owned();

    Ok(MovieRecord::builder()
        .link(link)
        .title(title)
        .updation(updation)
        .rating(rating)
        .labels(labels)
        .cover(cover)
        .info(collapsed_text(summary_block))
        .build())
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use scraper::Html;

    use super::extract;

    fn item(marker_block: &str, tags_block: &str) -> String {
        format!(
            r#"<div class="item">
                 <div class="pic">
                   <a class="nbg" href="https://movie.douban.com/subject/1292052/">
                     <img alt="肖申克的救赎" src="https://img2.doubanio.com/view/photo/s_ratio_poster/public/p480747492.jpg" class=""/>
                   </a>
                 </div>
                 <div class="info">
                   <ul>
                     <li class="title">
                       <a href="https://movie.douban.com/subject/1292052/" class="">
                         <em>肖申克的救赎
                         / The Shawshank Redemption</em>
                       </a>
                     </li>
                     <li class="intro">1994-09-10(多伦多电影节) / 美国 / 142分钟 / 剧情 犯罪</li>
                     <li>{marker_block}</li>
                     {tags_block}
                   </ul>
                 </div>
               </div>"#,
        )
    }

    fn listing_page(items: &[String]) -> Html {
        Html::parse_document(&format!(
            r#"<div class="grid-view">{}</div>"#,
            items.iter().join("\n"),
        ))
    }

    #[test]
    fn test_extract_full_item() {
        let page = listing_page(&[item(
            r#"<span class="rating45-t"></span>
               <span class="date">2018-12-24</span>
               <span class="comment"></span>"#,
            r#"<li><span class="tags">标签: 剧情 经典</span></li>"#,
        )]);
        let records = extract(&page);
        assert_eq!(records.len(), 1);
        let movie = &records[0];
        assert_eq!(movie.link(), "https://movie.douban.com/subject/1292052/");
        assert_eq!(movie.title(), "肖申克的救赎 / The Shawshank Redemption");
        assert_eq!(movie.updation().as_deref(), Some("2018-12-24"));
        assert_eq!(movie.rating().as_deref(), Some("45"));
        assert_eq!(movie.labels(), &["剧情", "经典"]);
        assert_eq!(
            movie.cover(),
            "https://img2.doubanio.com/view/photo/s_ratio_poster/public/p480747492.jpg"
        );
        assert_eq!(
            movie.info(),
            "1994-09-10(多伦多电影节) / 美国 / 142分钟 / 剧情 犯罪"
        );
    }

    #[test]
    fn test_extract_without_marker_spans_omits_optional_fields() {
        let page = listing_page(&[item(r#"<span class="comment"></span>"#, "")]);
        let records = extract(&page);
        let movie = &records[0];
        assert_eq!(movie.updation(), &None);
        assert_eq!(movie.rating(), &None);
        assert_eq!(movie.labels(), &[""]);

        let json = serde_json::to_string(movie).unwrap();
        assert!(!json.contains("updation"));
        assert!(!json.contains("rating"));
    }

    #[test]
    fn test_extract_skips_item_with_too_few_sub_blocks() {
        let truncated = r#"<div class="item">
                             <div class="info"><ul>
                               <li class="title"><a href="https://movie.douban.com/subject/1/">A</a></li>
                             </ul></div>
                           </div>"#;
        let page = listing_page(&[truncated.to_owned()]);
        assert!(extract(&page).is_empty());
    }

    #[test]
    fn test_extract_empty_grid() {
        let page = Html::parse_document(r#"<div class="grid-view"></div>"#);
        assert!(extract(&page).is_empty());
    }

    #[test]
    fn test_extract_page_without_grid() {
        let page = Html::parse_document(r#"<div class="article"></div>"#);
        assert!(extract(&page).is_empty());
    }
}
