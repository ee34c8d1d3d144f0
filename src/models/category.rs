/// One budget bucket with its recommended share of the monthly salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseCategory {
    pub id: u8,
    pub label: &'static str,
    pub percentage: u8,
}

/// The fixed plan, in display order. Percentages sum to 100.
pub const CATALOG: [ExpenseCategory; 9] = [
    ExpenseCategory::new(1, "House Rent", 30),
    ExpenseCategory::new(2, "Groceries & Food", 15),
    ExpenseCategory::new(3, "Transport & Travel", 5),
    ExpenseCategory::new(4, "Utilities (data, wi-fi, mobile, gas, electricity)", 5),
    ExpenseCategory::new(5, "Health Care & Insurance", 5),
    ExpenseCategory::new(6, "Personal Expenses", 10),
    ExpenseCategory::new(7, "Debt Repayment (Loan, EMIs)", 5),
    ExpenseCategory::new(8, "Savings & Investment", 20),
    ExpenseCategory::new(9, "Emergency Funds Contribution", 5),
];

impl ExpenseCategory {
    pub const fn new(id: u8, label: &'static str, percentage: u8) -> Self {
        Self {
            id,
            label,
            percentage,
        }
    }

    pub fn all() -> &'static [ExpenseCategory] {
        &CATALOG
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
