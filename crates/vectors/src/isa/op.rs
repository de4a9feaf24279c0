//! Operation kinds and operand signedness for RV32M.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::rv32m::funct3;

/// The eight RV32M multiply/divide operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MulDivOp {
    /// Low 32 bits of signed * signed.
    Mul,
    /// High 32 bits of signed * signed.
    Mulh,
    /// High 32 bits of signed * unsigned.
    Mulhsu,
    /// High 32 bits of unsigned * unsigned.
    Mulhu,
    /// Signed quotient, truncated toward zero.
    Div,
    /// Unsigned quotient.
    Divu,
    /// Signed remainder, sign of the dividend.
    Rem,
    /// Unsigned remainder.
    Remu,
}

/// How a 32-bit operand or result is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Signedness {
    /// Two's complement.
    Signed,
    /// Plain binary.
    Unsigned,
}

impl Signedness {
    /// Formats `value` as decimal under this interpretation.
    pub fn render(self, value: u32) -> String {
        match self {
            Self::Signed => (value as i32).to_string(),
            Self::Unsigned => value.to_string(),
        }
    }
}

impl MulDivOp {
    /// Every operation, in catalog order.
    pub const ALL: [Self; 8] = [
        Self::Mul,
        Self::Mulh,
        Self::Mulhsu,
        Self::Mulhu,
        Self::Div,
        Self::Divu,
        Self::Rem,
        Self::Remu,
    ];

    /// Upper-case mnemonic (`"MULHSU"`).
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Mul => "MUL",
            Self::Mulh => "MULH",
            Self::Mulhsu => "MULHSU",
            Self::Mulhu => "MULHU",
            Self::Div => "DIV",
            Self::Divu => "DIVU",
            Self::Rem => "REM",
            Self::Remu => "REMU",
        }
    }

    /// The funct3 field selecting this operation.
    pub const fn funct3(self) -> u32 {
        match self {
            Self::Mul => funct3::MUL,
            Self::Mulh => funct3::MULH,
            Self::Mulhsu => funct3::MULHSU,
            Self::Mulhu => funct3::MULHU,
            Self::Div => funct3::DIV,
            Self::Divu => funct3::DIVU,
            Self::Rem => funct3::REM,
            Self::Remu => funct3::REMU,
        }
    }

    /// Interpretation of operand A.
    pub const fn a_sign(self) -> Signedness {
        match self {
            Self::Mul | Self::Mulh | Self::Mulhsu | Self::Div | Self::Rem => Signedness::Signed,
            Self::Mulhu | Self::Divu | Self::Remu => Signedness::Unsigned,
        }
    }

    /// Interpretation of operand B.
    pub const fn b_sign(self) -> Signedness {
        match self {
            Self::Mul | Self::Mulh | Self::Div | Self::Rem => Signedness::Signed,
            Self::Mulhsu | Self::Mulhu | Self::Divu | Self::Remu => Signedness::Unsigned,
        }
    }

    /// Interpretation of the result.
    ///
    /// MULHSU follows operand A: the high half of a signed product is signed.
    pub const fn result_sign(self) -> Signedness {
        self.a_sign()
    }

    /// Whether this is a division or remainder (and so has a zero-divisor case).
    pub const fn is_divide(self) -> bool {
        matches!(self, Self::Div | Self::Divu | Self::Rem | Self::Remu)
    }
}

impl fmt::Display for MulDivOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Error returned when parsing an unknown mnemonic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMnemonic(pub String);

impl fmt::Display for UnknownMnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown RV32M mnemonic {:?}", self.0)
    }
}

impl std::error::Error for UnknownMnemonic {}

impl FromStr for MulDivOp {
    type Err = UnknownMnemonic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownMnemonic(s.to_owned()))
    }
}
