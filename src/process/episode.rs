use crate::error::ValidationError;
use crate::schema::Field;

/// One podcast episode, as read from a data row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Episode {
    pub temporada: String,
    pub programa_num_global: String,
    pub programa_num_temporada: Option<String>,
    pub fecha: String,
    pub tema: String,
    pub tema_descripcion: Option<String>,
    pub recomendacion_tipo: Option<String>,
    pub recomendacion_titulo: Option<String>,
    pub recomendacion_mas_info: Option<String>,
    pub recomendacion_link: Option<String>,
    pub musica_titulo: Option<String>,
    pub musica_compositor: Option<String>,
    pub musica_interprete: Option<String>,
    pub musica_origen: Option<String>,
    pub musica_mas_info: Option<String>,
    pub musica_link: Option<String>,
    pub archivo_audio: String,
    pub advertencia: Option<String>,
    pub fe_de_erratas: Option<String>,
}

impl Episode {
    /// Build an episode from cleaned cells indexed by [`Field::index`].
    ///
    /// `row` is the 1-based sheet row, used for error reporting.
    pub fn from_cells(
        mut cells: [Option<String>; Field::COUNT],
        row: usize,
    ) -> Result<Self, ValidationError> {
        for field in Field::ALL {
            if field.is_required() && cells[field.index()].is_none() {
                return Err(ValidationError::MissingRequired {
                    label: field.label(),
                    row,
                });
            }
        }

        let mut take = |f: Field| cells[f.index()].take();
        Ok(Self {
            temporada: take(Field::Temporada).unwrap_or_default(),
            programa_num_global: take(Field::ProgramaNumGlobal).unwrap_or_default(),
            programa_num_temporada: take(Field::ProgramaNumTemporada),
            fecha: take(Field::Fecha).unwrap_or_default(),
            tema: take(Field::Tema).unwrap_or_default(),
            tema_descripcion: take(Field::TemaDescripcion),
            recomendacion_tipo: take(Field::RecomendacionTipo),
            recomendacion_titulo: take(Field::RecomendacionTitulo),
            recomendacion_mas_info: take(Field::RecomendacionMasInfo),
            recomendacion_link: take(Field::RecomendacionLink),
            musica_titulo: take(Field::MusicaTitulo),
            musica_compositor: take(Field::MusicaCompositor),
            musica_interprete: take(Field::MusicaInterprete),
            musica_origen: take(Field::MusicaOrigen),
            musica_mas_info: take(Field::MusicaMasInfo),
            musica_link: take(Field::MusicaLink),
            archivo_audio: take(Field::ArchivoAudio).unwrap_or_default(),
            advertencia: take(Field::Advertencia),
            fe_de_erratas: take(Field::FeDeErratas),
        })
    }
}
