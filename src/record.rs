use core::fmt;

pub const HEADER: &str = "Categoria,Descrição,Valor (R$)";

/// One category line; description and value columns are left blank.
pub struct CategoryRow<'a> {
    pub category: &'a str,
}

impl fmt::Display for CategoryRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},,", self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_leaves_description_and_value_empty() {
        let row = CategoryRow {
            category: "Alimentação",
        };

        assert_eq!(row.to_string(), "Alimentação,,");
    }

    #[test]
    fn row_keeps_category_text_verbatim() {
        let row = CategoryRow {
            category: "  Lazer, viagens \"2024\" ",
        };

        assert_eq!(row.to_string(), "  Lazer, viagens \"2024\" ,,");
    }

    #[test]
    fn header_has_three_columns() {
        assert_eq!(HEADER.split(',').count(), 3);
    }
}
