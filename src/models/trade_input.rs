use derive_getters::Getters;

/// Pending form values, exactly as the user typed them.
#[derive(Clone, Debug, Default, Eq, Getters, PartialEq)]
pub struct TradeInput {
    symbol: String,
    quantity: String,
}

impl TradeInput {
    pub fn set_symbol(&mut self, symbol: &str) {
        self.symbol = symbol.to_string();
    }

    pub fn set_quantity(&mut self, quantity: &str) {
        self.quantity = quantity.to_string();
    }

    pub fn field_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Symbol => &mut self.symbol,
            InputField::Quantity => &mut self.quantity,
        }
    }

    pub fn clear(&mut self) {
        self.symbol.clear();
        self.quantity.clear();
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum InputField {
    #[default]
    Symbol,
    Quantity,
}

impl InputField {
    pub fn next(self) -> Self {
        match self {
            InputField::Symbol => InputField::Quantity,
            InputField::Quantity => InputField::Symbol,
        }
    }
}
