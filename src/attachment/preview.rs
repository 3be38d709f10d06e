use crate::attachment::Attachment;
use crate::utils::html::escape;

/// What the preview area next to an upload control shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Preview {
    #[default]
    Empty,
    Image {
        file_name: String,
        data_url: String,
    },
    FileName {
        file_name: String,
    },
}

impl Preview {
    /// Images are decoded to an inline data URL, other files show their name.
    pub fn for_file(file: Option<&Attachment>) -> Self {
        match file {
            None => Preview::Empty,
            Some(a) if a.is_image() => Preview::Image {
                file_name: a.file_name.clone(),
                data_url: a.to_data_url(),
            },
            Some(a) => Preview::FileName {
                file_name: a.file_name.clone(),
            },
        }
    }

    pub fn markup(&self) -> String {
        match self {
            Preview::Empty => String::new(),
            Preview::Image {
                file_name,
                data_url,
            } => format!(
                "<img src=\"{}\" alt=\"Preview\"><span class=\"file-name\">{}</span>",
                escape(data_url),
                escape(file_name)
            ),
            Preview::FileName { file_name } => {
                format!("<span class=\"file-name\">{}</span>", escape(file_name))
            }
        }
    }
}

/// Proof that a preview was requested; stale once a newer request starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTicket(u64);

/// Preview area of one upload control. Last request wins: a decode that
/// finishes after a newer file was chosen is dropped.
#[derive(Debug, Default)]
pub struct PreviewSlot {
    generation: u64,
    current: Preview,
}

impl PreviewSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> PreviewTicket {
        self.generation += 1;
        PreviewTicket(self.generation)
    }

    /// Returns false (and changes nothing) when the ticket is stale.
    pub fn complete(&mut self, ticket: PreviewTicket, preview: Preview) -> bool {
        if ticket.0 != self.generation {
            log::debug!("dropping stale preview (ticket {})", ticket.0);
            return false;
        }
        self.current = preview;
        true
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.current = Preview::Empty;
    }

    /// Choose a file and render its preview in one step.
    pub fn show(&mut self, file: Option<&Attachment>) -> &Preview {
        match file {
            None => self.clear(),
            Some(_) => {
                let ticket = self.begin();
                self.complete(ticket, Preview::for_file(file));
            }
        }
        &self.current
    }

    pub fn current(&self) -> &Preview {
        &self.current
    }
}
