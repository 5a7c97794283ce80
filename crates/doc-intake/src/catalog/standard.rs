use super::{ExtraFieldSpec, FieldSpec, InputKind, ServiceDefinition};

const LEGIBILITY_NOTICE: &str = "Observação: Os documentos que serão anexados deverão ser legíveis, se acaso algum dos documentos enviados não estiverem dessa forma, o próprio sistema através de inteligência artificial não fará a leitura do documento e poderá ocorrer o não aceite pelo sistema, por favor, pedimos que retire nova foto do documento de forma legível e tente anexar novamente. Lembre-se que essa documentação tem que realmente estar apta para leitura, pois é ela que irá fazer parte do seu processo administrativo ou judicial.";

pub(super) fn standard_services() -> Vec<ServiceDefinition> {
    vec![
        ServiceDefinition {
            id: "inss".to_string(),
            name: "Aposentadoria por incapacidade permanente (aposentadoria por invalidez) / auxílio por incapacidade temporária (auxílio doença)".to_string(),
            notice: LEGIBILITY_NOTICE.to_string(),
            extra_fields: vec![
                extra(
                    "inss-senha",
                    "Digite aqui a sua senha do site ou aplicativo MEU INSS",
                    InputKind::Password,
                    "Senha do Meu INSS",
                ),
                extra(
                    "inss-processo",
                    "Número do processo (caso já tenha essa informação)",
                    InputKind::Text,
                    "Número do processo",
                ),
                extra(
                    "inss-cat",
                    "CAT - Se tiver sofrido um acidente",
                    InputKind::Text,
                    "Número do CAT",
                ),
            ],
            fields: vec![
                single("inss-identidade", "Identidade (RG)"),
                single("inss-cpf", "CPF"),
                single(
                    "inss-comp",
                    "Comprovante de Residência em nome do cliente e com data que não seja superior a 6 meses, ou seja, não pode ser antigo",
                ),
                multi("inss-ctps", "Todas as Carteiras de Trabalho"),
                single("inss-fgts", "Extrato do FGTS"),
                multi("inss-laudos", "Laudos médicos, exames, receituários"),
                single(
                    "inss-ppp",
                    "PPP (Perfil Profissiográfico Previdenciário) - Insalubridade ou periculosidade",
                ),
                multi("inss-carnes", "Carnês do INSS (caso já tenha essa informação)"),
                multi("inss-outros", "Outros documentos"),
            ],
        },
        ServiceDefinition {
            id: "bpc".to_string(),
            name: "Atendimento BPC/LOAS".to_string(),
            notice: LEGIBILITY_NOTICE.to_string(),
            extra_fields: vec![
                extra(
                    "bpc-senha",
                    "Senha do site Meu INSS (essa senha o requerente consegue buscar em qualquer agência do INSS)",
                    InputKind::Password,
                    "Senha do Meu INSS",
                ),
            ],
            fields: vec![
                multi(
                    "bpc-moradores",
                    "RG, CPF e carteiras de trabalho de *todos* os moradores da residência",
                ),
                single("bpc-cadunico", "Comprovante de inscrição no Cadastro do CAD ÚNICO"),
                multi(
                    "bpc-gastos",
                    "Notas de compras com alimentação, gastos gerais, despesas médicas, gastos com o tratamento da deficiência, comprovantes dos gastos mensais que a família tem no mês, luz, água, telefone",
                ),
                multi(
                    "bpc-ajuda",
                    "Comprovantes de ajuda que o requerente recebe, a título de exemplo, declarações de igrejas que dão cesta básica, declarações de ajuda do próprio setor público",
                ),
                single("bpc-pensao", "Comprovante de pensão alimentícia caso haja o recebimento"),
                multi("bpc-fotos", "Fotos da residência, dos móveis"),
                multi(
                    "bpc-laudos",
                    "Em casos da deficiência laudos médicos, é indispensável que o laudo conste a CID da doença",
                ),
                multi("bpc-outros", "Outros documentos"),
            ],
        },
        ServiceDefinition {
            id: "trabalhista".to_string(),
            name: "Trabalhista".to_string(),
            notice: LEGIBILITY_NOTICE.to_string(),
            extra_fields: Vec::new(),
            fields: vec![
                single("trab-identidade", "Identidade (RG)"),
                single("trab-cpf", "CPF"),
                single("trab-comp", "Comprovante de Residência"),
                multi("trab-contracheques", "Contracheques"),
                single("trab-fgts", "Extrato Analítico do FGTS"),
                multi("trab-extratos", "Extratos mostrando os salários"),
                multi("trab-fotos", "Fotografias do trabalho"),
                multi("trab-whatsapp", "Mensagens de Whatsapp"),
                single("trab-trct", "Termo de recisão (TRCT)"),
                single("trab-ferias", "Recibo de férias"),
                multi("trab-outros", "Outros documentos"),
            ],
        },
        ServiceDefinition {
            id: "pensao_conjuge".to_string(),
            name: "Pensão por morte para esposa(o), filhos menores de 21 anos ou filho com deficiência".to_string(),
            notice: LEGIBILITY_NOTICE.to_string(),
            extra_fields: vec![
                extra(
                    "conj-senha",
                    "Senha do 'Meu INSS' da pessoa que está requerendo/pedindo a pensão por morte",
                    InputKind::Password,
                    "Senha do Meu INSS",
                ),
            ],
            fields: vec![
                single("conj-casamento", "Certidão de casamento"),
                single("conj-cnis", "CNIS do(a) falecido(a) ou carteira de trabalho"),
                single(
                    "conj-rgreq",
                    "RG (da pessoa que está requerendo/pedindo a pensão por morte)",
                ),
                single(
                    "conj-cpfreq",
                    "CPF (da pessoa que está requerendo/pedindo a pensão por morte)",
                ),
                single(
                    "conj-comp-falecido",
                    "Comprovante de residência do(a) falecido(a) - *Os comprovantes de residência não pode ser superiores a dois anos da data do óbito*",
                ),
                single(
                    "conj-comp-sobrevivente",
                    "Comprovante de residência do(a) cônjuge sobrevivente",
                ),
                single("conj-obito", "Certidão de óbito"),
                multi(
                    "conj-laudos",
                    "Laudos médicos que comprovem condição (Caso o cônjuge sobrevivente possua alguma incapacidade permanente ou deficiência)",
                ),
                multi(
                    "conj-acidente",
                    "Caso o falecimento tenha ocorrido por acidente de qualquer natureza (Documentos que comprovem circunstância - ex: Boletim de ocorrência, laudos médicos demostrando a questão de que tenha tido acidente))",
                ),
                single("conj-cpf-filho", "CPF do filho(a)"),
                multi("conj-laudos-filho", "Laudos médicos do filho(a)"),
                multi("conj-outros", "Outros documentos"),
            ],
        },
        ServiceDefinition {
            id: "pensao_companheiro".to_string(),
            name: "Pensão por morte para companheira(o)".to_string(),
            notice: LEGIBILITY_NOTICE.to_string(),
            extra_fields: Vec::new(),
            fields: vec![
                single("comp-rgreq", "RG da pessoa que deseja solicitar o benefício"),
                single("comp-cpfreq", "CPF da pessoa que deseja solicitar o benefício"),
                single("comp-rgfal", "RG do falecido(a)"),
                single("comp-cpffal", "CPF do falecido(a)"),
                single("comp-obito", "Certidão de óbito"),
                single("comp-comp", "Comprovante de residência"),
                multi(
                    "comp-uniao",
                    "Documentos que comprovem a união estável: (certidão de nascimento de filho em comum); prova de mesmo domicílio (comprovante de residência do(a) falecido(a) e do(a) requerente); conta bancária conjunta; declaração de Imposto de Renda em que um conste como dependente do outro; apólice de seguro em que um seja instituidor e o outro seja beneficiário; ficha de tratamento em instituição médica em que o companheiro conste como responsável pelo segurado, ou vice-versa; cadastro no CadÚnico; entre outros documentos que possam servir para essa comprovação",
                ),
                multi("comp-outros", "Outros documentos"),
            ],
        },
        ServiceDefinition {
            id: "aposentadoria".to_string(),
            name: "Aposentadoria".to_string(),
            notice: LEGIBILITY_NOTICE.to_string(),
            extra_fields: vec![
                extra(
                    "apos-senha",
                    "Digite aqui a sua senha do site ou aplicativo MEU INSS",
                    InputKind::Password,
                    "Senha do Meu INSS",
                ),
            ],
            fields: vec![
                single("apos-rg-cpf", "RG e CPF OU CNH legíveis"),
                single("apos-comp", "Comprovante de residência (recente – até 120 dias)"),
                multi(
                    "apos-ctps",
                    "CTPS – todas as carteiras, mesmo as antigas com páginas de identificação, contratos e anotações",
                ),
                single("apos-cnis", "Extrato CNIS completo"),
                single(
                    "apos-ppp",
                    "PPP – Perfil Profissiográfico Previdenciário (para atividades insalubres/com periculosidade)",
                ),
                multi(
                    "apos-ltcat",
                    "LTCAT, PPRA, PCMSO ou Laudo Técnico relacionado (para atividades insalubres/com periculosidade)",
                ),
                single(
                    "apos-ctc",
                    "Certidão de tempo de contribuição (CTC) e declaração com valores das remunerações (em caso de servidor público)",
                ),
                single(
                    "apos-reservista",
                    "Certificado de Reservista (em caso de ter servido o exército)",
                ),
                single(
                    "apos-fgts",
                    "Extrato analítico do FGTS (documento fornecido pela caixa econômica federal)",
                ),
                multi(
                    "apos-sentencas",
                    "Sentenças trabalhistas que reconheçam vínculo empregatício (em caso de já ter tido algum processo trabalhista, anexar a sentença)",
                ),
                multi(
                    "apos-vinculos",
                    "Comprovantes de vínculos que não estão reconhecidos no CNIS (carnês do INSS, recibos, notas fiscais e contratos de prestação de serviços)",
                ),
                multi("apos-exterior", "Comprovantes de tempo no exterior (se houver)"),
                multi("apos-outros", "Outros documentos"),
            ],
        },
        ServiceDefinition {
            id: "aposentadoria_rural".to_string(),
            name: "Aposentadoria Rural".to_string(),
            notice: LEGIBILITY_NOTICE.to_string(),
            extra_fields: vec![
                extra(
                    "rural-senha",
                    "Digite aqui sua senha do site ou aplicativo meu INSS",
                    InputKind::Password,
                    "Senha do Meu INSS",
                ),
            ],
            fields: vec![
                single("rural-rg-cpf", "RG e CPF ou CNH"),
                single(
                    "rural-certidao",
                    "Certidão de nascimento ou casamento (preferencialmente atualizada)",
                ),
                single("rural-comp", "Comprovante de residência atual (até 120 dias)"),
                multi(
                    "rural-ctps",
                    "CTPS – todas as carteiras de trabalho (mesmo sem ter tido registro, as CTPS devem ser enviadas na íntegra, ou seja, em todas as páginas que tiver algo anotado é para ter o envio)",
                ),
                multi("rural-notas-produtor", "Bloco de notas do produtor rural"),
                single(
                    "rural-declaracao-sindicato",
                    "Declaração de exercício rural pelo sindicato (com firma reconhecida)",
                ),
                single("rural-itr", "ITR (Imposto Territorial Rural)"),
                single("rural-ccir", "CCIR – Certificado de Cadastro de Imóvel Rural"),
                multi("rural-notas-venda", "Notas fiscais de venda de produção rural"),
                multi(
                    "rural-notas-compra",
                    "Notas fiscais de compra de insumos (sementes, ração, adubo)",
                ),
                multi("rural-contratos", "Contratos de arrendamento, meação ou parceria rural"),
                single("rural-incra", "Cadastro no INCRA"),
                multi("rural-credito", "Comprovantes de crédito rural, financiamentos ou custeio"),
                multi(
                    "rural-notas-terceiros",
                    "Notas de produtor de terceiros que mencionem o local de produção do cliente",
                ),
                multi(
                    "rural-documentacao-publica",
                    "Documentação pública com profissão 'lavrador(a)', 'agricultor', 'pescador' etc",
                ),
                multi("rural-ccir-itr-familia", "CCIR ou ITR em nome dos pais, irmãos ou cônjuge"),
                multi("rural-dap-caf", "DAP/CAF em nome de qualquer membro da família"),
                multi(
                    "rural-contratos-familia",
                    "Contratos de arrendamento/meação em nome de familiar",
                ),
                multi("rural-notas-familia", "Notas de produtor em nome do pai/mãe/marido"),
                multi(
                    "rural-certidoes-profissao",
                    "Certidões que indiquem profissão rural do familiar",
                ),
                multi(
                    "rural-certidao-nascimento-filhos",
                    "Certidão de nascimento dos filhos com profissão rural do pai/mãe",
                ),
                single(
                    "rural-certidao-casamento",
                    "Certidão de casamento com profissão 'lavrador(a)'",
                ),
                single("rural-alistamento", "Certidão de alistamento militar com profissão rural"),
                multi(
                    "rural-obito-familia",
                    "Certidão de óbito de familiares indicando atividade rural",
                ),
                multi(
                    "rural-historico-escolar",
                    "Histórico escolar dos filhos constando endereço rural",
                ),
                multi(
                    "rural-ficha-medica",
                    "Ficha de atendimento médico/hospitalar com endereço rural",
                ),
                multi("rural-recibos", "Recibos de pagamento por tarefa ou diária"),
                multi(
                    "rural-contratos-trabalho",
                    "Contratos de trabalho rurais (mesmo não registrados)",
                ),
                multi("rural-outros", "Outros documentos"),
            ],
        },
        ServiceDefinition {
            id: "documentos_rurais".to_string(),
            name: "Documentos rurais (para os clientes que trabalharam no meio rural) - Para revisão de aposentadoria ou pensão por morte".to_string(),
            notice: LEGIBILITY_NOTICE.to_string(),
            extra_fields: vec![
                extra(
                    "rurais-senha",
                    "Digite aqui sua senha do site ou aplicativo meu inss",
                    InputKind::Password,
                    "Senha do Meu INSS",
                ),
            ],
            fields: vec![
                single("rurais-rg-cpf", "RG e CPF ou CNH"),
                single(
                    "rurais-comp",
                    "Comprovante de residência atualizado (até no máximo 120 dias)",
                ),
                single("rurais-carta", "Carta de concessão da aposentadoria (se possuir)"),
                multi("rurais-ctps", "CTPS – todas as carteiras"),
                single("rurais-cnis", "Extrato CNIS atualizado (se possuir)"),
                single(
                    "rurais-fgts",
                    "FGTS (extrato analítico) (esse documento é emitido pela própria caixa econômica federal)",
                ),
                multi(
                    "rurais-holerites",
                    "Holerites/contracheques antigos em que os recibos estejam com valores maiores do que no CNIS",
                ),
                multi(
                    "rurais-sentenca",
                    "Sentença trabalhista (se houve processo na justiça do trabalho)",
                ),
                multi(
                    "rurais-notas-recibos",
                    "Notas fiscais/recibos de prestação de serviço (em que não houve recolhimento junto ao INSS)",
                ),
                multi(
                    "rurais-ppp",
                    "PPP – Perfil Profissiográfico Previdenciário, LTCAT, PPRA / PCMSO, Holerites com adicional de insalubridade/periculosidade, Laudos antigos da empresa (em caso do Autor ter trabalhado com fatores de risco: insalubridade ou periculosidade)",
                ),
                single(
                    "rurais-ctc",
                    "Certidão de Tempo de Contribuição (CTC) (para servidores públicos)",
                ),
                single(
                    "rurais-cat",
                    "CAT (se houver acidente de trabalho ou se trata de doença adquirida no trabalho)",
                ),
                multi("rurais-outros", "Outros documentos"),
            ],
        },
    ]
}

fn single(id: &str, label: &str) -> FieldSpec {
    FieldSpec {
        id: id.to_string(),
        label: label.to_string(),
        multiple: false,
    }
}

fn multi(id: &str, label: &str) -> FieldSpec {
    FieldSpec {
        multiple: true,
        ..single(id, label)
    }
}

fn extra(id: &str, label: &str, kind: InputKind, placeholder: &str) -> ExtraFieldSpec {
    ExtraFieldSpec {
        id: id.to_string(),
        label: label.to_string(),
        kind,
        placeholder: placeholder.to_string(),
    }
}
