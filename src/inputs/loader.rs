//! Load projection scenarios from CSV files

use super::LoanInputs;
use csv::Reader;
use serde::Serialize;
use std::error::Error;
use std::io::Read;
use std::path::Path;

/// Raw CSV row; headers follow the JSON field names
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    #[serde(default)]
    name: Option<String>,
    price: f64,
    down_payment: f64,
    interest_rate: f64,
    loan_tenure: u32,
    monthly_rent: f64,
    rent_escalation: f64,
    property_tax: f64,
    property_appreciation: f64,
}

impl CsvRow {
    fn into_named(self, row_number: usize) -> NamedInputs {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => format!("scenario-{}", row_number),
        };

        NamedInputs {
            name,
            inputs: LoanInputs {
                price: self.price,
                down_payment: self.down_payment,
                interest_rate: self.interest_rate,
                loan_tenure: self.loan_tenure,
                monthly_rent: self.monthly_rent,
                rent_escalation: self.rent_escalation,
                property_tax: self.property_tax,
                property_appreciation: self.property_appreciation,
            },
        }
    }
}

/// A scenario label paired with its inputs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedInputs {
    pub name: String,
    pub inputs: LoanInputs,
}

/// Load all scenarios from a CSV file
///
/// Rows are parsed but not validated; invalid scenarios surface as
/// per-scenario errors when they are projected.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedInputs>, Box<dyn Error>> {
    let reader = Reader::from_path(path)?;
    read_rows(reader)
}

/// Load scenarios from any reader (e.g. an in-memory string or stdin)
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<NamedInputs>, Box<dyn Error>> {
    read_rows(Reader::from_reader(reader))
}

fn read_rows<R: Read>(mut reader: Reader<R>) -> Result<Vec<NamedInputs>, Box<dyn Error>> {
    let mut scenarios = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result.map_err(|e| format!("row {}: {}", idx + 1, e))?;
        scenarios.push(row.into_named(idx + 1));
    }

    log::info!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "name,price,downPayment,interestRate,loanTenure,monthlyRent,rentEscalation,propertyTax,propertyAppreciation";

    #[test]
    fn test_load_from_reader() {
        let data = format!(
            "{}\nbase,31200000,5000000,8.25,20,170000,5,95000,6\n,5000000,1000000,0,1,20000,0,0,0\n",
            HEADER
        );

        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 2);

        assert_eq!(scenarios[0].name, "base");
        assert_eq!(scenarios[0].inputs, LoanInputs::default());

        // Blank name falls back to the row number
        assert_eq!(scenarios[1].name, "scenario-2");
        assert_eq!(scenarios[1].inputs.loan_tenure, 1);
        assert!((scenarios[1].inputs.interest_rate - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_name_column_optional() {
        let data = "price,downPayment,interestRate,loanTenure,monthlyRent,rentEscalation,propertyTax,propertyAppreciation\n\
                    1000000,200000,7,15,8000,3,5000,4\n";

        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].name, "scenario-1");
        assert_eq!(scenarios[0].inputs.loan_tenure, 15);
    }

    #[test]
    fn test_invalid_row_reports_row_number() {
        let data = format!("{}\nbad,abc,0,0,1,0,0,0,0\n", HEADER);

        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        assert!(err.to_string().starts_with("row 1:"), "got: {}", err);
    }

    #[test]
    fn test_invalid_inputs_still_load() {
        // Down payment above price parses fine; validation happens at projection time
        let data = format!("{}\nover,5000000,6000000,8,10,0,0,0,0\n", HEADER);

        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 1);
        assert!(scenarios[0].inputs.down_payment > scenarios[0].inputs.price);
    }
}
