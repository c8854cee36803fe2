use thiserror::Error;

pub const WEEKDAYS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleDay {
    pub day_number: u32,
    pub year_day: u32,
    pub prayer: &'static str,
    pub verse: &'static str,
    pub verse_ref: &'static str,
    pub reflection: &'static str,
}

/// One selectable page of the preview carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthEntry {
    pub name: &'static str,
    pub days_in_month: u32,
    /// Blank cells before day 1, Sunday = 0.
    pub first_weekday_offset: u32,
    pub sample_day: SampleDay,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("month list is empty")]
    NoMonths,
    #[error("{month}: weekday offset {offset} is outside 0..=6")]
    WeekdayOffset { month: &'static str, offset: u32 },
    #[error("{month}: sample day {day} is outside 1..={days}")]
    SampleDay {
        month: &'static str,
        day: u32,
        days: u32,
    },
    #[error("{month}: year day {year_day} is outside 1..=366")]
    YearDay { month: &'static str, year_day: u32 },
}

impl MonthEntry {
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.first_weekday_offset > 6 {
            return Err(ContentError::WeekdayOffset {
                month: self.name,
                offset: self.first_weekday_offset,
            });
        }
        let day = self.sample_day.day_number;
        if day == 0 || day > self.days_in_month {
            return Err(ContentError::SampleDay {
                month: self.name,
                day,
                days: self.days_in_month,
            });
        }
        let year_day = self.sample_day.year_day;
        if year_day == 0 || year_day > 366 {
            return Err(ContentError::YearDay {
                month: self.name,
                year_day,
            });
        }
        Ok(())
    }
}

pub fn validate_months(months: &[MonthEntry]) -> Result<(), ContentError> {
    if months.is_empty() {
        return Err(ContentError::NoMonths);
    }
    months.iter().try_for_each(MonthEntry::validate)
}

/// Page number printed in the preview footer.
pub fn page_number(index: usize, month: &MonthEntry) -> u32 {
    index as u32 * 30 + month.sample_day.day_number
}

pub const MONTHS: [MonthEntry; 3] = [
    MonthEntry {
        name: "Fevereiro",
        days_in_month: 28,
        first_weekday_offset: 6,
        sample_day: SampleDay {
            day_number: 14,
            year_day: 45,
            prayer: "Senhor, ensina-me a amar como Tu amas. Que meu coração reflita a Tua compaixão em cada encontro e cada palavra deste dia.",
            verse: "O amor é paciente, o amor é bondoso. Não inveja, não se vangloria, não se orgulha.",
            verse_ref: "1 Coríntios 13:4",
            reflection: "Amar não é sobre intensidade, mas sobre constância. Deus não pede que você ame perfeitamente — Ele pede que você tente, todos os dias, um pouquinho mais. E isso já é suficiente.",
        },
    },
    MonthEntry {
        name: "Março",
        days_in_month: 31,
        first_weekday_offset: 6,
        sample_day: SampleDay {
            day_number: 15,
            year_day: 74,
            prayer: "Pai, renova minhas forças nesta manhã. Que eu encontre paz mesmo em meio à correria e que Tua presença me acompanhe.",
            verse: "Aqueles que esperam no Senhor renovam as suas forças; sobem com asas como águias.",
            verse_ref: "Isaías 40:31",
            reflection: "Renovar não é começar do zero. É permitir que Deus cuide das partes cansadas de você enquanto te sustenta para seguir em frente. Descanse n'Ele hoje.",
        },
    },
    MonthEntry {
        name: "Abril",
        days_in_month: 30,
        first_weekday_offset: 2,
        sample_day: SampleDay {
            day_number: 10,
            year_day: 100,
            prayer: "Deus, me dá coragem para confiar mesmo quando não entendo os Teus caminhos. Que minha fé seja maior que o meu medo.",
            verse: "Confia no Senhor de todo o teu coração e não te estribes no teu próprio entendimento.",
            verse_ref: "Provérbios 3:5",
            reflection: "Confiar é um ato de fé silencioso. É acordar sem saber o que o dia reserva e ainda assim dizer: \"Deus, estou nas Tuas mãos.\" Hoje, pratique esse ato.",
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_months_are_valid() {
        assert_eq!(validate_months(&MONTHS), Ok(()));
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(validate_months(&[]), Err(ContentError::NoMonths));
    }

    #[test]
    fn sample_day_must_fit_the_month() {
        let mut month = MONTHS[0];
        month.sample_day.day_number = 29;
        assert_eq!(
            month.validate(),
            Err(ContentError::SampleDay {
                month: "Fevereiro",
                day: 29,
                days: 28
            })
        );

        month.sample_day.day_number = 0;
        assert!(month.validate().is_err());
    }

    #[test]
    fn weekday_offset_is_bounded() {
        let mut month = MONTHS[2];
        month.first_weekday_offset = 7;
        let err = month.validate().unwrap_err();
        assert_eq!(err.to_string(), "Abril: weekday offset 7 is outside 0..=6");
    }

    #[test]
    fn page_numbers_follow_the_month_index() {
        assert_eq!(page_number(0, &MONTHS[0]), 14);
        assert_eq!(page_number(1, &MONTHS[1]), 45);
        assert_eq!(page_number(2, &MONTHS[2]), 70);
    }
}
