use business::domain::analysis::model::{BarcodePayload, ImagePayload, ServiceResponse};

/// Human-readable summary of a barcode analysis.
pub fn render_barcode(envelope: &ServiceResponse<BarcodePayload>) -> String {
    let mut out = format!("{}\n", heading(&envelope.message, "Barcode analysis"));

    let Some(payload) = &envelope.payload else {
        out.push_str("No analysis returned\n");
        return out;
    };
    let analysis = &payload.analysis;

    out.push_str(&format!(
        "Product names\n  English:  {}\n  Korean:   {}\n  Japanese: {}\n  Chinese:  {}\n",
        analysis.name.english, analysis.name.korean, analysis.name.japanese, analysis.name.chinese
    ));
    out.push_str(&format!("Expiry date:      {}\n", analysis.expiry_date));
    out.push_str(&format!("Ingredients:      {}\n", analysis.ingredients_translated));
    out.push_str(&format!("Contains alcohol: {}\n", analysis.alcohol()));
    out.push_str(&format!("Contains pork:    {}\n", analysis.pork()));
    out.push_str(&format!("Contains beef:    {}\n", analysis.beef()));
    out.push_str(&format!("Plant based:      {}\n", analysis.plant_based()));
    out.push_str(&format!("Halal status:     {}\n", analysis.halal()));
    out.push_str(&format!("Reasoning:        {}\n", analysis.reasoning));
    out.push_str(&format!(
        "New item created: {}\n",
        if payload.is_new_item { "Yes" } else { "No" }
    ));
    out
}

/// Human-readable summary of an image analysis.
///
/// When the text does not follow the six-line format it is printed as-is,
/// preceded by the parser error.
pub fn render_image(envelope: &ServiceResponse<ImagePayload>) -> String {
    let mut out = format!("{}\n", heading(&envelope.message, "Product analysis"));

    let Some(payload) = &envelope.payload else {
        out.push_str("No analysis returned\n");
        return out;
    };

    match payload.report() {
        Ok(report) => {
            out.push_str(&format!("Product name: {}\n", report.product_name));
            out.push_str(&format!("Expiry date:  {}\n", report.expiry_date));
            out.push_str(&format!("Ingredients:  {}\n", report.ingredients));
            out.push_str(&format!("Alcohol:      {}\n", report.alcohol));
            out.push_str(&format!("Halal:        {}\n", report.halal));
            out.push_str(&format!("Reasoning:    {}\n", report.reasoning));
        }
        Err(e) => {
            out.push_str(&format!("Unrecognised analysis format ({e}):\n"));
            out.push_str(&format!("{}\n", payload.analysis));
        }
    }
    out
}

fn heading<'a>(message: &'a str, fallback: &'a str) -> &'a str {
    if message.trim().is_empty() {
        fallback
    } else {
        message
    }
}
