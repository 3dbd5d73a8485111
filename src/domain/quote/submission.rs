//! Quote preparation: the checks a submission must pass before a payload exists.

use super::{QuoteError, QuotePayload, WidgetMode};
use crate::domain::catalog::Catalog;
use crate::domain::foundation::Timestamp;
use crate::domain::pricing::PriceCalculator;
use crate::domain::selection::SelectionState;

/// Validates a submission and assembles its payload.
///
/// # Steps
///
/// 1. The quote form must be visible
/// 2. Name and phone must be filled in
/// 3. The price range is recomputed from the selection
/// 4. The payload is assembled at `captured_at`
///
/// No payload is produced unless every step passes.
pub fn prepare_quote(
    catalog: &Catalog,
    selection: &SelectionState,
    mode: WidgetMode,
    captured_at: Timestamp,
) -> Result<QuotePayload, QuoteError> {
    if !mode.shows_quote_form() {
        return Err(QuoteError::FormHidden);
    }
    selection.contact.validate_required()?;

    let price_range = PriceCalculator::estimate(catalog, selection)?;
    QuotePayload::assemble(catalog, selection, price_range, captured_at)
}
