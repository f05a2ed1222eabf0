pub mod episode;
pub mod style;

use chrono::{Local, NaiveDateTime};
use std::{io::Write, path::Path};
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{PodcastError, Result};
use crate::probe::AudioProbe;
use crate::process::{Episode, EpisodeCollection};
use episode::write_episode;

pub const DEFAULT_AUDIO_URL_BASE: &str =
    "http://www.sagdl.org/sites/default/files/unaventanaaluniverso/";

const INTRO: &str = "<p>En esta página podrás encontrar grabaciones de ediciones anteriores de \
<a href=\"/actividades/radio\">Una Ventana al Universo</a>&nbsp;transmitidas en Jalisco Radio.</p>\n";

const ATTRIBUTION_URL: &str = "https://github.com/tonioluna/podcast_generator_sag";

/// Build the whole page in memory.
///
/// Seasons and programs are listed in descending string order.
/// `generated_at` is printed in the footer.
pub fn render_page(
    data: &EpisodeCollection,
    probe: &dyn AudioProbe,
    audio_base_url: &str,
    generated_at: NaiveDateTime,
) -> Result<String> {
    let mut seasons: Vec<&String> = data.seasons().iter().collect();
    seasons.sort_by(|a, b| b.cmp(a));

    let mut out = String::new();
    out.push_str(&format!("<span style=\"{}\">\n", style::BODY));
    out.push_str(INTRO);

    write_index(&mut out, data, &seasons);

    for season in &seasons {
        out.push_str(&format!(
            "<h1><span style=\"{}\">Temporada {}</span></h1>\n",
            style::SEASON,
            season
        ));
        for entry in season_programs(data, season) {
            write_episode(&mut out, entry, audio_base_url, probe)?;
        }
    }

    out.push_str(&format!(
        "<br/><br/>Página actualizada por última vez el {} usando un \
         <a href=\"{}\" target=\"_BLANK\">método terrible</a>.<br /><br />\n\n",
        generated_at.format("%d/%m/%Y %H:%M:%S"),
        ATTRIBUTION_URL
    ));
    out.push_str("</span>\n");
    Ok(out)
}

/// Render `data` and write it to `output`, replacing any existing file.
///
/// Nothing is written unless every episode rendered.
pub fn render(
    data: &EpisodeCollection,
    output: &Path,
    probe: &dyn AudioProbe,
    audio_base_url: &str,
) -> Result<()> {
    info!("Writing results to {}", output.display());
    let html = render_page(data, probe, audio_base_url, Local::now().naive_local())?;

    let dir = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| PodcastError::io(dir, e))?;
    tmp.write_all(html.as_bytes())
        .map_err(|e| PodcastError::io(tmp.path(), e))?;
    tmp.persist(output)
        .map_err(|e| PodcastError::io(output, e.error))?;

    info!("Wrote {} bytes for {} programs", html.len(), data.len());
    Ok(())
}

/// Programs of `season`, highest program number first.
fn season_programs<'a>(
    data: &'a EpisodeCollection,
    season: &'a str,
) -> impl Iterator<Item = &'a Episode> + 'a {
    data.episodes().rev().filter(move |e| e.temporada == season)
}

fn write_index(out: &mut String, data: &EpisodeCollection, seasons: &[&String]) {
    out.push_str(&format!(
        "<p><h1 id=\"indice\"><span style=\"{}\">Índice</span></h1>\n",
        style::SEASON
    ));
    out.push_str("<ul>\n");
    for season in seasons {
        out.push_str(&format!(
            "<li><span style=\"{}\">Temporada {}</span>\n",
            style::ITEM_TITLE,
            season
        ));
        out.push_str("<ul>\n");
        for entry in season_programs(data, season) {
            out.push_str(&format!(
                "<li><a href=\"#programa_{0}\">Programa {0}, {1}</a></li>\n",
                entry.programa_num_global, entry.fecha
            ));
        }
        out.push_str("</ul></li>\n");
    }
    out.push_str("</ul>\n");
    out.push_str("</p>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::load_from_reader;
    use crate::schema::Field;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::tempdir;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 8, 31)
            .unwrap()
            .and_hms_opt(21, 5, 9)
            .unwrap()
    }

    fn sheet(rows: &[(&str, &str)]) -> EpisodeCollection {
        let header = Field::ALL
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(",");
        let mut content = format!("{}\n", header);
        for (season, programa) in rows {
            let mut cells = vec![String::new(); Field::COUNT];
            cells[Field::Temporada.index()] = season.to_string();
            cells[Field::ProgramaNumGlobal.index()] = programa.to_string();
            cells[Field::Fecha.index()] = format!("fecha {}", programa);
            cells[Field::Tema.index()] = format!("tema {}", programa);
            cells[Field::ArchivoAudio.index()] = format!("{}.mp3", programa);
            content.push_str(&cells.join(","));
            content.push('\n');
        }
        load_from_reader(content.as_bytes()).unwrap()
    }

    fn always(_: &str) -> bool {
        true
    }

    #[test]
    fn two_row_round_trip() {
        let data = sheet(&[("2", "102"), ("1", "101")]);
        let html = render_page(&data, &always, DEFAULT_AUDIO_URL_BASE, fixed_time()).unwrap();

        assert_eq!(html.matches("<hr id=\"programa_").count(), 2);
        let s2 = html.find(">Temporada 2</span></h1>").unwrap();
        let s1 = html.find(">Temporada 1</span></h1>").unwrap();
        assert!(s2 < s1);
        assert!(html.find("programa_102\"/>").unwrap() < html.find("programa_101\"/>").unwrap());
        for absent in ["Recomendación", "Música", "Fe de Erratas", "&#128681;"] {
            assert!(!html.contains(absent), "unexpected {}", absent);
        }
        assert!(html.contains("<li><a href=\"#programa_102\">Programa 102, fecha 102</a></li>"));
        assert!(html.contains("última vez el 31/08/2019 21:05:09"));
        assert!(html.starts_with("<span style="));
        assert!(html.ends_with("</span>\n"));
    }

    #[test]
    fn ordering_is_descending_and_deterministic() {
        let data = sheet(&[("1", "101"), ("3", "301"), ("1", "103"), ("2", "201"), ("1", "102")]);
        let a = render_page(&data, &always, DEFAULT_AUDIO_URL_BASE, fixed_time()).unwrap();
        let b = render_page(&data, &always, DEFAULT_AUDIO_URL_BASE, fixed_time()).unwrap();
        assert_eq!(a, b);

        let anchors: Vec<usize> = ["301", "201", "103", "102", "101"]
            .iter()
            .map(|p| a.find(&format!("<hr id=\"programa_{}\"/>", p)).unwrap())
            .collect();
        assert!(anchors.windows(2).all(|w| w[0] < w[1]));

        let index_end = a.find("</ul>\n</p>").unwrap();
        let links: Vec<usize> = ["301", "201", "103", "102", "101"]
            .iter()
            .map(|p| a[..index_end].find(&format!("href=\"#programa_{}\"", p)).unwrap())
            .collect();
        assert!(links.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn raw_string_order_is_kept_for_multi_digit_numbers() {
        let data = sheet(&[("1", "99"), ("1", "100")]);
        let html = render_page(&data, &always, DEFAULT_AUDIO_URL_BASE, fixed_time()).unwrap();
        assert!(html.find("programa_99\"/>").unwrap() < html.find("programa_100\"/>").unwrap());
    }

    #[test]
    fn empty_collection_renders_skeleton() {
        let data = EpisodeCollection::default();
        let html = render_page(&data, &always, DEFAULT_AUDIO_URL_BASE, fixed_time()).unwrap();
        assert!(html.contains("id=\"indice\""));
        assert!(!html.contains("programa_"));
    }

    #[test]
    fn render_writes_file_and_overwrites() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("podcast.html");
        fs::write(&out, "old contents")?;

        let data = sheet(&[("1", "101")]);
        render(&data, &out, &always, DEFAULT_AUDIO_URL_BASE)?;

        let html = fs::read_to_string(&out)?;
        assert!(html.contains("programa_101"));
        assert!(!html.contains("old contents"));
        Ok(())
    }

    #[test]
    fn unreachable_audio_leaves_no_output() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("podcast.html");
        let data = sheet(&[("1", "101"), ("1", "102")]);

        let probe = |url: &str| !url.ends_with("101.mp3");
        let err = render(&data, &out, &probe, DEFAULT_AUDIO_URL_BASE).unwrap_err();
        assert!(matches!(
            err,
            PodcastError::AudioUnavailable { ref programa, .. } if programa == "101"
        ));
        assert!(!out.exists());
        assert_eq!(fs::read_dir(dir.path())?.count(), 0);
        Ok(())
    }

    #[test]
    fn failed_render_keeps_previous_page() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("podcast.html");
        fs::write(&out, "previous page")?;
        let data = sheet(&[("1", "101")]);

        let never = |_: &str| false;
        assert!(render(&data, &out, &never, DEFAULT_AUDIO_URL_BASE).is_err());
        assert_eq!(fs::read_to_string(&out)?, "previous page");
        Ok(())
    }
}
