use std::path::PathBuf;

use crate::{
    media::{AudioExtractor, MediaDownloader},
    progress::Reporter,
    Summarizer, SummaryPipeline, Transcriber,
};

pub struct SummaryPipelineBuilder<D = (), E = (), T = (), S = (), R = ()> {
    workdir: PathBuf,
    downloader: D,
    extractor: E,
    transcriber: T,
    summarizer: S,
    reporter: R,
}

impl SummaryPipelineBuilder {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            downloader: (),
            extractor: (),
            transcriber: (),
            summarizer: (),
            reporter: (),
        }
    }
}

impl<D, E, T, S, R> SummaryPipelineBuilder<D, E, T, S, R> {
    pub fn downloader<D2: MediaDownloader + Send + Sync + 'static>(
        self,
        downloader: D2,
    ) -> SummaryPipelineBuilder<D2, E, T, S, R> {
        SummaryPipelineBuilder {
            workdir: self.workdir,
            downloader,
            extractor: self.extractor,
            transcriber: self.transcriber,
            summarizer: self.summarizer,
            reporter: self.reporter,
        }
    }

    pub fn extractor<E2: AudioExtractor + Send + Sync + 'static>(
        self,
        extractor: E2,
    ) -> SummaryPipelineBuilder<D, E2, T, S, R> {
        SummaryPipelineBuilder {
            workdir: self.workdir,
            downloader: self.downloader,
            extractor,
            transcriber: self.transcriber,
            summarizer: self.summarizer,
            reporter: self.reporter,
        }
    }

    pub fn transcriber<T2: Transcriber + Send + Sync + 'static>(
        self,
        transcriber: T2,
    ) -> SummaryPipelineBuilder<D, E, T2, S, R> {
        SummaryPipelineBuilder {
            workdir: self.workdir,
            downloader: self.downloader,
            extractor: self.extractor,
            transcriber,
            summarizer: self.summarizer,
            reporter: self.reporter,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> SummaryPipelineBuilder<D, E, T, S2, R> {
        SummaryPipelineBuilder {
            workdir: self.workdir,
            downloader: self.downloader,
            extractor: self.extractor,
            transcriber: self.transcriber,
            summarizer,
            reporter: self.reporter,
        }
    }

    pub fn reporter<R2: Reporter + 'static>(
        self,
        reporter: R2,
    ) -> SummaryPipelineBuilder<D, E, T, S, R2> {
        SummaryPipelineBuilder {
            workdir: self.workdir,
            downloader: self.downloader,
            extractor: self.extractor,
            transcriber: self.transcriber,
            summarizer: self.summarizer,
            reporter,
        }
    }
}

impl<D, E, T, S, R> SummaryPipelineBuilder<D, E, T, S, R>
where
    D: MediaDownloader + Send + Sync + 'static,
    E: AudioExtractor + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    R: Reporter + 'static,
{
    pub fn build(self) -> SummaryPipeline<D, E, T, S, R> {
        SummaryPipeline {
            workdir: self.workdir,
            downloader: self.downloader,
            extractor: self.extractor,
            transcriber: self.transcriber,
            summarizer: self.summarizer,
            reporter: self.reporter,
        }
    }
}
