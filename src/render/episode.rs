use tracing::debug;
use url::Url;

use super::style;
use crate::error::{PodcastError, Result};
use crate::probe::AudioProbe;
use crate::process::Episode;

/// Append the detail block of one episode to `out`.
///
/// The audio file is probed before anything is written, so a failure
/// leaves `out` untouched.
pub fn write_episode(
    out: &mut String,
    entry: &Episode,
    audio_base_url: &str,
    probe: &dyn AudioProbe,
) -> Result<()> {
    let audio_url = audio_url(audio_base_url, entry, probe)?;
    let num = &entry.programa_num_global;
    debug!("rendering program {}", num);

    out.push_str("<p>\n");
    out.push_str(&format!("<hr id=\"programa_{}\"/>\n", num));
    out.push_str(&format!(
        "<span style=\"{}\">Programa {}</span><br/>\n",
        style::HEADER,
        num
    ));

    match &entry.programa_num_temporada {
        Some(in_season) => out.push_str(&format!(
            "<span style=\"{}\">Programa #{} de la Temporada #{}, emitido el {}</span><br/>\n",
            style::DATE,
            in_season,
            entry.temporada,
            entry.fecha
        )),
        None => out.push_str(&format!(
            "<span style=\"{}\">Programa de la Temporada #{}, emitido el {}</span><br/>\n",
            style::DATE,
            entry.temporada,
            entry.fecha
        )),
    }

    out.push_str(&format!(
        "<span style=\"{}\">Tema</span>: <span style=\"{}\">{}</span>\n",
        style::ITEM_TYPE,
        style::ITEM_TITLE,
        entry.tema
    ));
    if let Some(desc) = &entry.tema_descripcion {
        out.push_str(&format!(", {}.", desc));
    }
    out.push_str("<br/>\n");

    write_recommendation(out, entry);
    write_music(out, entry);

    if let Some(errata) = &entry.fe_de_erratas {
        out.push_str(&format!(
            "<span style=\"{}\">Fe de Erratas: </span><span style=\"{}\">{}</span><br/>\n",
            style::ITEM_TYPE,
            style::ERRATA,
            errata
        ));
    }

    if let Some(warning) = &entry.advertencia {
        out.push_str(&format!(
            "<span style=\"{}\">&#128681; {} &#128681;</span><br/>\n",
            style::WARNING,
            warning
        ));
    }

    out.push_str(&format!(
        "<audio controls=\"\" style=\"width: -webkit-fill-available;\"><source src=\"{}\" type=\"audio/mpeg\" /></audio>\n",
        audio_url
    ));
    out.push_str(&format!(
        "<span style=\"{}\"><a href=\"{}\" download=\"podcast.una_ventana_al_universo.programa_{}.mp3\">\
         Descarga el podcast en formato mp3</a><br/><a href=\"#indice\">Regresar al Índice</a></span>\n",
        style::DOWNLOAD_LINK,
        audio_url,
        num
    ));
    out.push_str("</p><br/>\n");
    Ok(())
}

/// Absolute audio URL for `entry`, failing unless the probe finds it.
fn audio_url(base: &str, entry: &Episode, probe: &dyn AudioProbe) -> Result<String> {
    let url = format!("{}{}", base, entry.archivo_audio);
    let unavailable = || PodcastError::AudioUnavailable {
        programa: entry.programa_num_global.clone(),
        url: url.clone(),
    };
    if Url::parse(&url).is_err() || !probe.exists(&url) {
        return Err(unavailable());
    }
    Ok(url)
}

fn write_titled_link(out: &mut String, title: &str, link: Option<&String>) {
    match link {
        Some(href) => out.push_str(&format!(
            "<a href=\"{}\" target=\"_BLANK\">{}</a>",
            href, title
        )),
        None => out.push_str(title),
    }
}

fn write_recommendation(out: &mut String, entry: &Episode) {
    let Some(title) = &entry.recomendacion_titulo else {
        return;
    };
    out.push_str(&format!(
        "<span style=\"{}\">Recomendación</span>: <span style=\"{}\">\n",
        style::ITEM_TYPE,
        style::ITEM_TITLE
    ));
    write_titled_link(out, title, entry.recomendacion_link.as_ref());
    out.push_str("</span>");
    if let Some(kind) = &entry.recomendacion_tipo {
        out.push_str(&format!(" ({})", kind));
    }
    if let Some(more) = &entry.recomendacion_mas_info {
        out.push_str(&format!(". {}.", more));
    }
    out.push_str("<br/>\n");
}

fn write_music(out: &mut String, entry: &Episode) {
    let Some(title) = &entry.musica_titulo else {
        return;
    };
    out.push_str(&format!(
        "<span style=\"{}\">Música</span>: <span style=\"{}\">",
        style::ITEM_TYPE,
        style::ITEM_TITLE
    ));
    write_titled_link(out, title, entry.musica_link.as_ref());
    out.push_str("</span>");
    if let Some(composer) = &entry.musica_compositor {
        out.push_str(&format!(", compuesta por {}", composer));
    }
    if let Some(performer) = &entry.musica_interprete {
        out.push_str(&format!(", interpretada por {}", performer));
    }
    if let Some(source) = &entry.musica_origen {
        out.push_str(&format!(", obtenida de {}", source));
    }
    if let Some(more) = &entry.musica_mas_info {
        out.push_str(&format!(". {}", more));
    }
    out.push_str(".<br/>\n");
}
