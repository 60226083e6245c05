//! 견적서 조립: 설비 줄 + 치수 계산 줄, 합계, 플레이트 집계.

pub mod equipment;
pub mod export;
pub mod line;
pub mod plates;
pub mod total;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::catalog::{Catalog, CatalogError};
use crate::dimensioning::{self, DimensioningError, DimensioningQuote, InputError};
use crate::project::Project;

pub use equipment::{generate_equipment_lines, EquipmentLine};
pub use export::{export_csv, write_csv};
pub use line::{LineKind, QuoteLineItem};
pub use plates::{plate_summary, RoomPlateCount};
pub use total::{calculate_total, QuoteTotals};

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("CSV 출력 오류: {0}")]
    Csv(#[from] csv::Error),
}

impl From<DimensioningError> for QuoteError {
    fn from(err: DimensioningError) -> Self {
        match err {
            DimensioningError::Input(e) => QuoteError::Input(e),
            DimensioningError::Catalog(e) => QuoteError::Catalog(e),
        }
    }
}

/// 완성된 견적.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub project_name: String,
    pub catalog_version: String,
    pub equipment: Vec<EquipmentLine>,
    pub dimensioning: Option<DimensioningQuote>,
    pub plates: Vec<RoomPlateCount>,
}

impl Quote {
    pub fn equipment_line_items(&self) -> Vec<QuoteLineItem> {
        self.equipment
            .iter()
            .enumerate()
            .flat_map(|(i, line)| line.line_items(i))
            .collect()
    }

    pub fn dimensioning_line_items(&self) -> Vec<QuoteLineItem> {
        self.dimensioning
            .as_ref()
            .map(DimensioningQuote::line_items)
            .unwrap_or_default()
    }

    /// 설비 줄 다음에 치수 계산 줄.
    pub fn line_items(&self) -> Vec<QuoteLineItem> {
        let mut lines = self.equipment_line_items();
        lines.extend(self.dimensioning_line_items());
        lines
    }

    pub fn totals(&self) -> QuoteTotals {
        calculate_total(&self.equipment_line_items(), &self.dimensioning_line_items())
    }
}

/// 프로젝트 문서와 카탈로그로 견적을 만든다.
pub fn build_quote(project: &Project, catalog: &Catalog) -> Result<Quote, QuoteError> {
    project.validate()?;

    let equipment = generate_equipment_lines(project.equipments_in_room_order(), catalog);
    let dimensioning = project
        .dimensioning
        .as_ref()
        .map(|input| dimensioning::generate(input, catalog))
        .transpose()?;

    let quote = Quote {
        project_name: project.name.clone(),
        catalog_version: catalog.version.clone(),
        equipment,
        dimensioning,
        plates: plate_summary(project),
    };
    info!(
        project = %quote.project_name,
        lines = quote.line_items().len(),
        total = %quote.totals().rounded().total,
        "견적 생성 완료"
    );
    Ok(quote)
}
