use time::OffsetDateTime;

/// School subjects covered by the archive. Labels are the Portuguese names
/// shown in the UI and used as `<select>` option values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subject {
    Matematica,
    LinguaPortuguesa,
    Fisica,
    Quimica,
    Biologia,
    Historia,
    Geografia,
    Ingles,
    Frances,
}

impl Subject {
    pub const ALL: [Subject; 9] = [
        Subject::Matematica,
        Subject::LinguaPortuguesa,
        Subject::Fisica,
        Subject::Quimica,
        Subject::Biologia,
        Subject::Historia,
        Subject::Geografia,
        Subject::Ingles,
        Subject::Frances,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Subject::Matematica => "Matemática",
            Subject::LinguaPortuguesa => "Língua Portuguesa",
            Subject::Fisica => "Física",
            Subject::Quimica => "Química",
            Subject::Biologia => "Biologia",
            Subject::Historia => "História",
            Subject::Geografia => "Geografia",
            Subject::Ingles => "Inglês",
            Subject::Frances => "Francês",
        }
    }

    pub fn from_label(label: &str) -> Option<Subject> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.label() == label)
    }
}

/// Grade levels 7ª through 12ª Classe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GradeLevel {
    Setima,
    Oitava,
    Nona,
    Decima,
    DecimaPrimeira,
    DecimaSegunda,
}

impl GradeLevel {
    pub const ALL: [GradeLevel; 6] = [
        GradeLevel::Setima,
        GradeLevel::Oitava,
        GradeLevel::Nona,
        GradeLevel::Decima,
        GradeLevel::DecimaPrimeira,
        GradeLevel::DecimaSegunda,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GradeLevel::Setima => "7ª Classe",
            GradeLevel::Oitava => "8ª Classe",
            GradeLevel::Nona => "9ª Classe",
            GradeLevel::Decima => "10ª Classe",
            GradeLevel::DecimaPrimeira => "11ª Classe",
            GradeLevel::DecimaSegunda => "12ª Classe",
        }
    }

    pub fn from_label(label: &str) -> Option<GradeLevel> {
        GradeLevel::ALL
            .into_iter()
            .find(|grade| grade.label() == label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExamType {
    ExameNacional,
    ProvaFrequencia,
    TesteIntermedio,
}

impl ExamType {
    pub fn label(&self) -> &'static str {
        match self {
            ExamType::ExameNacional => "Exame Nacional",
            ExamType::ProvaFrequencia => "Prova de Frequência",
            ExamType::TesteIntermedio => "Teste Intermédio",
        }
    }
}

/// One archived examination record. The catalog is a fixed in-process list;
/// records are never created or mutated at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct Exam {
    pub id: String,
    pub title: String,
    pub subject: Subject,
    pub grade: GradeLevel,
    pub year: i32,
    pub exam_type: ExamType,
    pub description: Option<String>,
    pub download_url: Option<String>,
}

/// Active catalog filters. `None` on a selector means the "all" sentinel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
    pub subject: Option<Subject>,
    pub grade: Option<GradeLevel>,
    pub year: Option<i32>,
    pub query: String,
    pub only_favorites: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserRole {
    Student,
    Teacher,
    Admin,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Student => "Estudante",
            UserRole::Teacher => "Professor",
            UserRole::Admin => "Administrador",
        }
    }
}

/// Session-only user record fabricated by the mock authentication layer.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub role: UserRole,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub created_at: Option<OffsetDateTime>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_labels_round_trip() {
        for subject in Subject::ALL {
            assert_eq!(Subject::from_label(subject.label()), Some(subject));
        }
        assert_eq!(Subject::from_label("Todas"), None);
    }

    #[test]
    fn grade_labels_round_trip() {
        for grade in GradeLevel::ALL {
            assert_eq!(GradeLevel::from_label(grade.label()), Some(grade));
        }
        assert_eq!(GradeLevel::from_label(""), None);
    }
}
