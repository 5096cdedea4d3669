use clap::ValueEnum;
use goi_types::{Dataset, SourceFormat};

/// Datasets this tool knows how to build. Input and output paths are
/// fixed; there is nothing to configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DatasetId {
    /// Tab-separated classical Japanese list
    Group30,
    /// Numbered English vocabulary CSV
    Teppeki,
    /// Comma list with continuation lines
    Kobun351,
}

pub const GROUP30: Dataset = Dataset {
    name: "group30",
    textbook: "GROUP30で覚える古文単語600",
    input: "data/raw_group30.txt",
    output: "data/json/group30-kobun-600.json",
    format: SourceFormat::TabSeparated,
};

pub const TEPPEKI: Dataset = Dataset {
    name: "teppeki",
    textbook: "改訂版 鉄緑会東大英単語熟語 鉄壁",
    input: "data/teppeki.csv",
    output: "data/json/teppeki.json",
    format: SourceFormat::NumberedCsv,
};

pub const KOBUN351: Dataset = Dataset {
    name: "kobun351",
    textbook: "理解を深める核心古文単語351",
    input: "data/temp_kobun_data.txt",
    output: "data/json/理解を深める核心古文単語351.json",
    format: SourceFormat::CommaContinuation,
};

impl DatasetId {
    pub fn dataset(self) -> Dataset {
        match self {
            DatasetId::Group30 => GROUP30,
            DatasetId::Teppeki => TEPPEKI,
            DatasetId::Kobun351 => KOBUN351,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dataset_writes_under_the_json_dir() {
        for id in [DatasetId::Group30, DatasetId::Teppeki, DatasetId::Kobun351] {
            let dataset = id.dataset();
            assert!(dataset.output.starts_with("data/json/"));
            assert!(!dataset.textbook.is_empty());
        }
    }
}
