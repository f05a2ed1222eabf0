// src/schema/types.rs

/// One canonical column of the episode sheet.
///
/// The order of [`Field::ALL`] is the order the header schema is declared
/// in, and the order in which cells are extracted from each data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Temporada,
    ProgramaNumGlobal,
    ProgramaNumTemporada,
    Fecha,
    Tema,
    TemaDescripcion,
    RecomendacionTipo,
    RecomendacionTitulo,
    RecomendacionMasInfo,
    RecomendacionLink,
    MusicaTitulo,
    MusicaCompositor,
    MusicaInterprete,
    MusicaOrigen,
    MusicaMasInfo,
    MusicaLink,
    ArchivoAudio,
    Advertencia,
    FeDeErratas,
}

impl Field {
    pub const COUNT: usize = 19;

    pub const ALL: [Field; Field::COUNT] = [
        Field::Temporada,
        Field::ProgramaNumGlobal,
        Field::ProgramaNumTemporada,
        Field::Fecha,
        Field::Tema,
        Field::TemaDescripcion,
        Field::RecomendacionTipo,
        Field::RecomendacionTitulo,
        Field::RecomendacionMasInfo,
        Field::RecomendacionLink,
        Field::MusicaTitulo,
        Field::MusicaCompositor,
        Field::MusicaInterprete,
        Field::MusicaOrigen,
        Field::MusicaMasInfo,
        Field::MusicaLink,
        Field::ArchivoAudio,
        Field::Advertencia,
        Field::FeDeErratas,
    ];

    /// Fields that must be non-empty on every data row.
    pub const REQUIRED: [Field; 5] = [
        Field::Temporada,
        Field::ProgramaNumGlobal,
        Field::Fecha,
        Field::Tema,
        Field::ArchivoAudio,
    ];

    /// Canonical key, as used in logs.
    pub fn key(self) -> &'static str {
        match self {
            Field::Temporada => "temporada",
            Field::ProgramaNumGlobal => "programa_num_global",
            Field::ProgramaNumTemporada => "programa_num_temporada",
            Field::Fecha => "fecha",
            Field::Tema => "tema",
            Field::TemaDescripcion => "tema_descripcion",
            Field::RecomendacionTipo => "recomendacion_tipo",
            Field::RecomendacionTitulo => "recomendacion_titulo",
            Field::RecomendacionMasInfo => "recomendacion_mas_info",
            Field::RecomendacionLink => "recomendacion_link",
            Field::MusicaTitulo => "musica_titulo",
            Field::MusicaCompositor => "musica_compositor",
            Field::MusicaInterprete => "musica_interprete",
            Field::MusicaOrigen => "musica_origen",
            Field::MusicaMasInfo => "musica_mas_info",
            Field::MusicaLink => "musica_link",
            Field::ArchivoAudio => "archivo_audio",
            Field::Advertencia => "advertencia",
            Field::FeDeErratas => "fe_de_erratas",
        }
    }

    /// Exact header text expected in the CSV.
    pub fn label(self) -> &'static str {
        match self {
            Field::Temporada => "Temporada",
            Field::ProgramaNumGlobal => "Num Programa Global",
            Field::ProgramaNumTemporada => "Num Programa Temporada",
            Field::Fecha => "Fecha",
            Field::Tema => "Tema",
            Field::TemaDescripcion => "Tema Descripcion",
            Field::RecomendacionTipo => "Recomendacion Tipo",
            Field::RecomendacionTitulo => "Recomendacion Titulo",
            Field::RecomendacionMasInfo => "Recomendacion Mas Info",
            Field::RecomendacionLink => "Recomendacion Link",
            Field::MusicaTitulo => "Musica Titulo",
            Field::MusicaCompositor => "Musica Compositor",
            Field::MusicaInterprete => "Musica Interprete",
            Field::MusicaOrigen => "Musica Origen",
            Field::MusicaMasInfo => "Musica Mas Info",
            Field::MusicaLink => "Musica Link",
            Field::ArchivoAudio => "Archivo Audio",
            Field::Advertencia => "Advertencia",
            Field::FeDeErratas => "Fe de Erratas",
        }
    }

    pub fn is_required(self) -> bool {
        Field::REQUIRED.contains(&self)
    }

    /// Position in [`Field::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Exact, case-sensitive lookup of a header cell.
    pub fn from_label(cell: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.label() == cell)
    }
}
